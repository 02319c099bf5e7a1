mod actions;
mod dashboard;
mod flashcards;
mod notice;
mod quiz;
mod study_buddy;

pub use actions::{DashboardActions, use_dashboard_actions};
pub use dashboard::DashboardView;
pub use flashcards::FlashcardsView;
pub use notice::NoticeModal;
pub use quiz::QuizView;
pub use study_buddy::StudyBuddyView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
