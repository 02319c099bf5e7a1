use services::{ActiveView, DashboardSummary, FeatureProgress};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureStatVm {
    Progress { width: String, label: String },
    Count { label: &'static str, value: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureCardVm {
    pub view: ActiveView,
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub cta: &'static str,
    pub stat: Option<FeatureStatVm>,
}

/// CSS width for a progress bar filled to `fraction`.
#[must_use]
pub fn progress_width(fraction: f64) -> String {
    let percent = (fraction.clamp(0.0, 1.0) * 100.0).round();
    format!("width: {percent}%")
}

fn progress_stat(progress: FeatureProgress, unit: &str) -> FeatureStatVm {
    FeatureStatVm::Progress {
        width: progress_width(progress.fraction),
        label: format!("{} / {} {unit}", progress.position, progress.total),
    }
}

#[must_use]
pub fn map_dashboard_cards(summary: &DashboardSummary) -> Vec<FeatureCardVm> {
    vec![
        FeatureCardVm {
            view: ActiveView::Flashcards,
            icon: "🃏",
            title: "Flashcards",
            blurb: "Generate interactive flashcards from your notes and track your progress.",
            cta: "Go to Flashcards",
            stat: summary.flashcards.map(|p| progress_stat(p, "cards")),
        },
        FeatureCardVm {
            view: ActiveView::Quiz,
            icon: "📝",
            title: "Quiz Maker",
            blurb: "Create quizzes from your study material and see your score.",
            cta: "Go to Quiz",
            stat: summary.quiz.map(|p| progress_stat(p, "questions")),
        },
        FeatureCardVm {
            view: ActiveView::StudyBuddy,
            icon: "🤖",
            title: "Study Buddy",
            blurb: "Ask any study question and get instant answers.",
            cta: "Go to Study Buddy",
            stat: (summary.questions_asked > 0).then_some(FeatureStatVm::Count {
                label: "Questions asked",
                value: summary.questions_asked,
            }),
        },
    ]
}
