//! Rule-based sentiment and stance scoring for scraped posts.
//!
//! Deliberately simple: term counting against fixed lexicons plus a
//! small set of stance patterns. The lexicons carry the Traditional
//! Chinese vocabulary the collectors actually see.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentiment label for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Declared stance toward the recall itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallStance {
    SupportRecall,
    OpposeRecall,
    Neutral,
}

/// Scored sentiment for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSentiment {
    pub label: SentimentLabel,
    /// Net polarity in [-1, 1].
    pub score: f64,
    /// Confidence in [0, 1], scaled from hit density.
    pub confidence: f64,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

const POSITIVE_TERMS: &[&str] = &[
    "支持", "贊成", "同意", "好", "棒", "讚", "優秀", "正確", "應該", "必要",
    "希望", "期待", "加油", "努力", "改善", "進步", "成功", "勝利", "正義",
    "民主", "自由", "公正", "透明", "負責", "誠實", "清廉", "有能力",
];

const NEGATIVE_TERMS: &[&str] = &[
    "反對", "不同意", "爛", "差", "糟", "噁心", "討厭", "憤怒", "生氣", "失望",
    "騙", "謊言", "貪污", "腐敗", "無能", "失職", "背叛", "欺騙", "虛偽",
    "獨裁", "專制", "壓迫", "不公", "黑箱", "暗盤", "買票", "作弊",
];

/// Polarity beyond which a text stops being neutral.
const NEUTRAL_BAND: f64 = 0.1;

/// Lexicon-based sentiment and stance classifier.
pub struct SentimentLexicon {
    support_patterns: Vec<Regex>,
    oppose_patterns: Vec<Regex>,
}

impl SentimentLexicon {
    pub fn new() -> Self {
        Self {
            support_patterns: Self::build_support_patterns(),
            oppose_patterns: Self::build_oppose_patterns(),
        }
    }

    fn build_support_patterns() -> Vec<Regex> {
        [
            r"支持.{0,6}罷免",
            r"同意.{0,6}罷免",
            r"罷免.{0,6}成功",
            r"一定要.{0,6}罷免",
            r"罷免.{0,6}通過",
            r"投.{0,4}同意",
        ]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
    }

    fn build_oppose_patterns() -> Vec<Regex> {
        [
            r"反對.{0,6}罷免",
            r"不同意.{0,6}罷免",
            r"罷免.{0,6}失敗",
            r"拒絕.{0,6}罷免",
            r"反罷免",
            r"投.{0,4}不同意",
        ]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
    }

    /// Count lexicon hits and derive a net polarity score.
    pub fn score_text(&self, text: &str) -> TextSentiment {
        if text.is_empty() {
            return TextSentiment {
                label: SentimentLabel::Neutral,
                score: 0.0,
                confidence: 0.0,
                positive_hits: 0,
                negative_hits: 0,
            };
        }

        let positive_hits: usize = POSITIVE_TERMS
            .iter()
            .map(|term| text.matches(term).count())
            .sum();
        let negative_hits: usize = NEGATIVE_TERMS
            .iter()
            .map(|term| text.matches(term).count())
            .sum();

        let total = positive_hits + negative_hits;
        let score = if total == 0 {
            0.0
        } else {
            (positive_hits as f64 - negative_hits as f64) / total as f64
        };

        let label = if score > NEUTRAL_BAND {
            SentimentLabel::Positive
        } else if score < -NEUTRAL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        TextSentiment {
            label,
            score,
            confidence: (score.abs() * total.min(10) as f64 / 10.0).min(1.0),
            positive_hits,
            negative_hits,
        }
    }

    /// Classify the declared recall stance, if any.
    pub fn stance(&self, text: &str) -> RecallStance {
        let support = self
            .support_patterns
            .iter()
            .filter(|p| p.is_match(text))
            .count();
        let oppose = self
            .oppose_patterns
            .iter()
            .filter(|p| p.is_match(text))
            .count();

        if support > oppose {
            RecallStance::SupportRecall
        } else if oppose > support {
            RecallStance::OpposeRecall
        } else {
            RecallStance::Neutral
        }
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}
