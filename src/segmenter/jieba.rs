use super::Segmenter;
use jieba_rs::Jieba;

/// Segmenter backed by jieba-rs with the bundled dictionary
///
/// Loading the dictionary is the expensive part; build one instance per
/// run and share it.
pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
}

impl JiebaSegmenter {
    /// Create a segmenter with the default dictionary and HMM enabled
    pub fn new() -> Self {
        tracing::debug!("Loading jieba default dictionary");
        Self {
            jieba: Jieba::new(),
            hmm: true,
        }
    }

    /// Toggle HMM-based discovery of words missing from the dictionary
    pub fn hmm(mut self, enabled: bool) -> Self {
        self.hmm = enabled;
        self
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, self.hmm)
    }
}
