// ==========================================
// 示例数据生成器
// ==========================================
// 用途: 生成示例 OEE 数据集 CSV
// 输出: data/sample_oee_data.csv
// 口径: 时间列单位小时, ideal_cycle_time 单位 分钟/件
// ==========================================

use csv::Writer;
use rand::Rng;
use std::error::Error;
use std::fs;

// CSV 表头(固定列契约 + 两个说明性标记列)
const CSV_HEADER: &[&str] = &[
    "device_id",
    "location",
    "month",
    "planned_production_time",
    "operating_time",
    "total_count",
    "good_count",
    "ideal_cycle_time",
    "has_maintenance",
    "has_quality_issues",
];

const DEVICES: &[&str] = &[
    "PACK001", "PACK002", "PACK003", // 包装线
    "WRAP001", "WRAP002", // 缠绕机
    "SEAL001", "SEAL002", "SEAL003", // 封口机
];

const LOCATIONS: &[&str] = &[
    "PRODUCTION_LINE_1",
    "PRODUCTION_LINE_2",
    "PRODUCTION_LINE_3",
    "QUALITY_CONTROL",
    "FINAL_PACKAGING",
];

/// 设备族性能画像 (可用率, 表现性, 良品率)
fn profile(device: &str) -> (f64, f64, f64) {
    match &device[..4] {
        "PACK" => (0.85, 0.90, 0.95),
        "WRAP" => (0.80, 0.85, 0.92),
        _ => (0.75, 0.80, 0.90), // SEAL
    }
}

/// 设备族基准节拍范围 (分钟/件)
fn cycle_time_range(device: &str) -> (f64, f64) {
    match &device[..4] {
        "PACK" => (0.5, 1.0),
        "WRAP" => (0.8, 1.5),
        _ => (1.0, 2.0), // SEAL
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();

    // 2024 与 2025 两年的月份; 2025 基准指标提升 5%
    let months: Vec<String> = (2024..=2025)
        .flat_map(|year| (1..=12).map(move |m| format!("{year}-{m:02}")))
        .collect();

    fs::create_dir_all("data")?;
    let out_path = "data/sample_oee_data.csv";
    let mut writer = Writer::from_path(out_path)?;
    writer.write_record(CSV_HEADER)?;

    let mut row_count = 0usize;
    for device in DEVICES {
        let (base_availability, _base_performance, base_quality) = profile(device);
        let (cycle_lo, cycle_hi) = cycle_time_range(device);

        for location in LOCATIONS {
            for month in &months {
                let year: i32 = month[..4].parse()?;
                let month_num: u32 = month[5..].parse()?;
                let improvement = if year == 2025 { 1.05 } else { 1.0 };

                // 计划生产时间 (小时)
                let planned: f64 = rng.random_range(400.0..500.0);

                // 夏季 (6-8月) 产出下调
                let seasonal = if (6..=8).contains(&month_num) { 0.9 } else { 1.0 };

                // 10% 概率出现检修窗口
                let has_maintenance = rng.random_bool(0.1);
                let operating = if has_maintenance {
                    let maintenance_hours: f64 = rng.random_range(20.0..40.0);
                    (planned - maintenance_hours) * seasonal
                } else {
                    planned * seasonal * base_availability * improvement
                };
                // 运行时间不得超过计划时间(校验门口径)
                let operating = (operating * rng.random_range(0.95..1.05)).min(planned);

                // 节拍: 2025 略有改善
                let ideal_cycle_time = rng.random_range(cycle_lo..cycle_hi) / improvement;

                // 产量按运行时间与节拍推出
                let total_count = (operating * 60.0 / ideal_cycle_time) as u64;

                // 质量事故概率 2025 降低
                let has_quality_issues = rng.random_bool(0.05 / improvement);
                let quality_factor = if has_quality_issues {
                    rng.random_range(0.7..0.9)
                } else {
                    (base_quality * improvement).min(0.999)
                };
                let total_count =
                    ((total_count as f64) * rng.random_range(0.98..1.02)) as u64;
                let good_count =
                    (((total_count as f64) * quality_factor) as u64).min(total_count);

                writer.write_record(&[
                    device.to_string(),
                    location.to_string(),
                    month.clone(),
                    format!("{planned:.2}"),
                    format!("{operating:.2}"),
                    total_count.to_string(),
                    good_count.to_string(),
                    format!("{ideal_cycle_time:.2}"),
                    has_maintenance.to_string(),
                    has_quality_issues.to_string(),
                ])?;
                row_count += 1;
            }
        }
    }

    writer.flush()?;
    println!("示例数据已生成: {out_path} ({row_count} 行)");
    Ok(())
}
