//! Shared display types for uploaded files and fixture records.

use crate::components::icon::Icon;
use crate::format::format_megabytes;

/// Coarse classification of an uploaded file, used only to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Document,
    Other,
}

impl FileKind {
    /// Classify by MIME type. Browsers report an empty string for unknown types.
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("image") {
            FileKind::Image
        } else if mime.contains("pdf") {
            FileKind::Document
        } else {
            FileKind::Other
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            FileKind::Image => Icon::Image,
            FileKind::Document => Icon::FileText,
            FileKind::Other => Icon::File,
        }
    }
}

/// Metadata captured from a browser `File`. The contents are never read.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub kind: FileKind,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        let mime = mime.into();
        let kind = FileKind::from_mime(&mime);
        Self {
            name: name.into(),
            size,
            mime,
            kind,
        }
    }

    pub fn size_label(&self) -> String {
        format!("{} MB", format_megabytes(self.size))
    }
}

/// Tag on an insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Warning,
    Success,
    Info,
}

/// Icon and colour classes for an insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightStyle {
    pub icon: Icon,
    pub bg_class: &'static str,
    pub text_class: &'static str,
}

impl InsightKind {
    pub fn style(self) -> InsightStyle {
        match self {
            InsightKind::Warning => InsightStyle {
                icon: Icon::AlertCircle,
                bg_class: "bg-warning",
                text_class: "text-warning",
            },
            InsightKind::Success => InsightStyle {
                icon: Icon::CheckCircle,
                bg_class: "bg-success",
                text_class: "text-success",
            },
            InsightKind::Info => InsightStyle {
                icon: Icon::FileText,
                bg_class: "bg-accent",
                text_class: "text-accent",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Arrow and colour class. Stable categories show no indicator.
    pub fn indicator(self) -> Option<(Icon, &'static str)> {
        match self {
            Trend::Up => Some((Icon::TrendingUp, "text-destructive")),
            Trend::Down => Some((Icon::TrendingDown, "text-success")),
            Trend::Stable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendingCategory {
    pub name: &'static str,
    pub amount: f64,
    pub percentage: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSummary {
    pub total_transactions: u32,
    pub total_amount: f64,
    pub avg_transaction: f64,
    pub time_range: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotal {
    pub month: &'static str,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetCategory {
    pub name: &'static str,
    pub spent: f64,
    pub limit: f64,
}

impl BudgetCategory {
    /// Share of the limit spent, clamped to 0..=100 for the progress bar.
    pub fn percent_used(&self) -> f64 {
        if self.limit <= 0.0 {
            return 100.0;
        }
        (self.spent / self.limit * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Assistant,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_mime() {
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Image);
        assert_eq!(FileKind::from_mime("image/jpeg"), FileKind::Image);
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Document);
        assert_eq!(FileKind::from_mime("text/csv"), FileKind::Other);
        assert_eq!(FileKind::from_mime(""), FileKind::Other);
    }

    #[test]
    fn test_uploaded_file_size_label() {
        let file = UploadedFile::new("statement.pdf", 2_621_440, "application/pdf");
        assert_eq!(file.kind, FileKind::Document);
        assert_eq!(file.size_label(), "2.50 MB");
    }

    #[test]
    fn test_insight_styles_are_distinct() {
        let warning = InsightKind::Warning.style();
        let success = InsightKind::Success.style();
        let info = InsightKind::Info.style();
        assert_eq!(warning.icon, Icon::AlertCircle);
        assert_eq!(success.icon, Icon::CheckCircle);
        assert_eq!(info.icon, Icon::FileText);
        assert_ne!(warning.bg_class, success.bg_class);
        assert_ne!(success.bg_class, info.bg_class);
    }

    #[test]
    fn test_trend_indicator() {
        assert_eq!(Trend::Up.indicator().map(|(i, _)| i), Some(Icon::TrendingUp));
        assert_eq!(Trend::Down.indicator().map(|(i, _)| i), Some(Icon::TrendingDown));
        assert!(Trend::Stable.indicator().is_none());
    }

    #[test]
    fn test_budget_percent_used_is_clamped() {
        let under = BudgetCategory { name: "Groceries", spent: 300.0, limit: 400.0 };
        assert_eq!(under.percent_used(), 75.0);
        assert!(!under.is_over());

        let over = BudgetCategory { name: "Dining", spent: 687.42, limit: 500.0 };
        assert_eq!(over.percent_used(), 100.0);
        assert!(over.is_over());

        let no_limit = BudgetCategory { name: "Misc", spent: 10.0, limit: 0.0 };
        assert_eq!(no_limit.percent_used(), 100.0);
    }
}
