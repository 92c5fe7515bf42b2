mod jieba;


pub use jieba::JiebaSegmenter;

use crate::filter::is_chinese_word;
use std::collections::BTreeSet;

/// Core trait for word segmentation backends
pub trait Segmenter: Send + Sync {
    /// Split text into tokens
    ///
    /// # Arguments
    /// * `text` - Raw UTF-8 content of a file
    ///
    /// # Returns
    /// Tokens borrowed from `text`, in document order. Punctuation,
    /// whitespace and latin runs are returned as tokens too.
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Segment content and keep the unique pure-Chinese words
///
/// Tokens are trimmed before filtering. The returned set iterates in
/// code-point order, which is the order words are written in.
pub fn extract_chinese_words(segmenter: &dyn Segmenter, content: &str) -> BTreeSet<String> {
    if content.is_empty() {
        return BTreeSet::new();
    }

    segmenter
        .cut(content)
        .into_iter()
        .map(str::trim)
        .filter(|word| is_chinese_word(word))
        .map(str::to_string)
        .collect()
}
