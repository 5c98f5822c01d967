// ==========================================
// OEE 助手 - 查询参数抽取器
// ==========================================
// 职责: 自由文本 → 筛选三元组 {device_id, location, month}
// 方式: 有序 (正则, 组装) 规则表, 先匹配者生效
// 红线: 规则顺序是语义的一部分, 前面的规则遮蔽后面的
// ==========================================

use crate::domain::QueryFilter;
use regex::{Captures, Regex};

/// 单条抽取规则: 正则 + 捕获组装配函数
struct ExtractionRule {
    pattern: Regex,
    assemble: fn(&Captures) -> String,
}

impl ExtractionRule {
    fn new(pattern: &str, assemble: fn(&Captures) -> String) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("抽取规则正则编译失败"),
            assemble,
        }
    }
}

/// 按声明顺序求值, 第一条命中的规则胜出
fn first_match(rules: &[ExtractionRule], text: &str) -> Option<String> {
    rules
        .iter()
        .find_map(|rule| rule.pattern.captures(text).map(|c| (rule.assemble)(&c)))
}

// ==========================================
// ParamExtractor - 参数抽取器
// ==========================================

/// 查询参数抽取器
///
/// 纯函数式: 任意输入都产出一个(可能全缺省的)筛选三元组,
/// 不会失败。所有正则在构造时编译一次。
pub struct ParamExtractor {
    device_rules: Vec<ExtractionRule>,
    location_rules: Vec<ExtractionRule>,
    month_pattern: Regex,
    year_pattern: Regex,
}

/// 英文月份全名 → 两位数字月份
const MONTH_MAP: &[(&str, &str)] = &[
    ("january", "01"),
    ("february", "02"),
    ("march", "03"),
    ("april", "04"),
    ("may", "05"),
    ("june", "06"),
    ("july", "07"),
    ("august", "08"),
    ("september", "09"),
    ("october", "10"),
    ("november", "11"),
    ("december", "12"),
];

impl ParamExtractor {
    pub fn new() -> Self {
        // 设备规则: 捕获数字尾缀, 统一组装为 PACK###
        // 注意: 前缀写死为 PACK, 即使文本写的是 device —
        // 历史行为, 未经产品决策不得改动(WRAP/SEAL 设备无法经文本命中)
        let device_rules = vec![
            ExtractionRule::new(r"(?:device\s+)?(?:pack|device)\s*(\d+)", assemble_device),
            ExtractionRule::new(r"for\s+(?:pack|device)\s*(\d+)", assemble_device),
            ExtractionRule::new(r"(?:pack|device)(\d+)", assemble_device),
        ];

        // 产线规则: 数字原样保留, 组装为 PRODUCTION_LINE_<N>
        let location_rules = vec![
            ExtractionRule::new(
                r"(?:location\s+)?production[_\s]*line[_\s]*(\d+)",
                assemble_location,
            ),
            ExtractionRule::new(r"for\s+production[_\s]*line[_\s]*(\d+)", assemble_location),
            ExtractionRule::new(r"in\s+production[_\s]*line[_\s]*(\d+)", assemble_location),
        ];

        let month_pattern = Regex::new(
            r"(january|february|march|april|may|june|july|august|september|october|november|december)",
        )
        .expect("月份正则编译失败");

        let year_pattern = Regex::new(r"20\d{2}").expect("年份正则编译失败");

        Self {
            device_rules,
            location_rules,
            month_pattern,
            year_pattern,
        }
    }

    /// 从自由文本抽取筛选三元组
    ///
    /// 输入在入口处统一转小写; 未命中的维度保持缺省。
    pub fn extract(&self, text: &str) -> QueryFilter {
        let text = text.to_lowercase();

        let device_id = first_match(&self.device_rules, &text);
        let location = first_match(&self.location_rules, &text);

        let mut month = self
            .month_pattern
            .captures(&text)
            .and_then(|c| c.get(1))
            .and_then(|m| month_number(m.as_str()))
            .map(|m| m.to_string());

        // 年份只在已抽取到月份时生效, 组合为 MM-YYYY;
        // 没有月份的年份直接丢弃(历史不对称行为, 刻意保留)
        if let Some(year) = self.year_pattern.find(&text) {
            if let Some(m) = month.as_ref() {
                month = Some(format!("{}-{}", m, year.as_str()));
            }
        }

        QueryFilter {
            device_id,
            location,
            month,
        }
    }
}

impl Default for ParamExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn assemble_device(captures: &Captures) -> String {
    format!("PACK{:0>3}", &captures[1])
}

fn assemble_location(captures: &Captures) -> String {
    format!("PRODUCTION_LINE_{}", &captures[1])
}

fn month_number(name: &str) -> Option<&'static str> {
    MONTH_MAP
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}
