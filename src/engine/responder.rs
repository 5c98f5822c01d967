// ==========================================
// OEE 助手 - 响应组装器
// ==========================================
// 职责: (原始问题, 指标结果) → 对话式多行回复
// 红线: 行序固定: 问候 → OEE → 分量 → 对比提示 → 低值建议
// ==========================================

use crate::domain::OeeResult;

/// 响应组装器
///
/// 纯函数; 回复为产品界面文案(英文)。
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    /// 组装回复
    pub fn compose(&self, text: &str, result: &OeeResult) -> String {
        let text = text.to_lowercase();
        let mut lines = Vec::new();

        // 问候(前缀匹配, "high ..." 也会触发 — 历史行为)
        if text.starts_with("hi") || text.starts_with("hello") || text.starts_with("hey") {
            lines.push("Hello! I'm your OEE assistant.".to_string());
        }

        // OEE 值(恒有)
        lines.push(format!("The OEE is {}%", result.oee));

        // 分量明细(按需)
        if text.contains("component") || text.contains("breakdown") {
            lines.push(format!("Availability: {}%", result.availability));
            lines.push(format!("Performance: {}%", result.performance));
            lines.push(format!("Quality: {}%", result.quality));
        }

        // 对比提示(按需)
        if text.contains("compare") {
            lines.push(
                "Would you like to compare this with another device or time period?".to_string(),
            );
        }

        // 低值建议(百分比口径, 阈值 80)
        if result.oee < 80.0 {
            lines.push(
                "The OEE is below optimal levels. Would you like suggestions for improvement?"
                    .to_string(),
            );
        }

        lines.join("\n")
    }
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new()
    }
}
