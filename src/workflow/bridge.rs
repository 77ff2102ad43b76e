//! Seed templates for promoting one workflow's output into the write
//! workflow's topic field.

/// Wraps a vision analysis in the write-workflow prompt template. The
/// analysis text is embedded verbatim.
pub fn vision_seed(analysis: &str) -> String {
    format!("基於以下圖片分析結果，撰寫一篇吸引人的貼文：\n\n{analysis}")
}

/// Wraps brainstorm suggestions in the write-workflow prompt template.
pub fn brainstorm_seed(suggestions: &str) -> String {
    format!("基於以下討論出的主題與大綱，撰寫一篇正式貼文：\n\n{suggestions}")
}
