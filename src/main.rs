// ==========================================
// OEE 助手 - CLI 入口
// ==========================================
// 用途: 加载数据集并回答一条自然语言查询
// 用法: oee-assistant [数据文件] <问题...>
// 说明: HTTP/前端宿主不在本仓库范围内, 此入口用于本地验证
// ==========================================

use oee_assistant::app::{get_default_data_path, AppState};
use oee_assistant::domain::QueryRequest;
use oee_assistant::logging;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("OEE 助手 - 设备综合效率查询");
    tracing::info!("系统版本: {}", oee_assistant::VERSION);
    tracing::info!("==================================================");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("用法: oee-assistant [数据文件.csv|.xlsx] <问题...>");
        eprintln!("示例: oee-assistant data/sample_oee_data.csv \"how is pack001 in march 2024\"");
        return ExitCode::FAILURE;
    }

    // 第一个参数若指向存在的数据文件则作为数据源, 否则用默认路径
    let data_path = if PathBuf::from(&args[0]).is_file() && args.len() > 1 {
        PathBuf::from(args.remove(0))
    } else {
        get_default_data_path()
    };

    let question = args.join(" ");

    let state = match AppState::new(&data_path) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("数据集加载失败: {e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let request = QueryRequest {
        message: question,
        device_id: None,
        location: None,
        month: None,
    };

    match state.assistant_api.query(&request) {
        Ok(response) => {
            println!("{}", response.message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("查询失败: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
