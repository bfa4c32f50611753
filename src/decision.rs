use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Spam,
    Ham,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Spam => write!(f, "spam"),
            Label::Ham => write!(f, "ham"),
        }
    }
}

/// Picks the label with the higher score. Ties go to spam.
pub fn decide(score_spam: f64, score_ham: f64) -> Label {
    if score_spam >= score_ham {
        Label::Spam
    } else {
        Label::Ham
    }
}
