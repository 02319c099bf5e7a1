use services::{ActiveView, BusyAction};

use super::test_harness::{FakeClient, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_feature_cards() {
    let harness = setup_view_harness(FakeClient::default());

    let html = harness.render();
    assert!(html.contains("StudyBot"), "missing sidebar title in {html}");
    for cta in ["Go to Flashcards", "Go to Quiz", "Go to Study Buddy"] {
        assert!(html.contains(cta), "missing {cta} in {html}");
    }
    assert!(!html.contains("Progress"), "no progress before any deck: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_smoke_generates_and_flips() {
    let mut harness = setup_view_harness(FakeClient::default());
    harness.update(|c| c.show(ActiveView::Flashcards));
    assert!(harness.render().contains("Generate Flashcards"));

    harness.update(|c| c.set_notes_input("cell biology"));
    harness.submit(BusyAction::Flashcards);
    assert!(harness.render().contains("Generating..."));

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Card 1 of 2"), "missing position in {html}");
    assert!(html.contains("Mitosis"), "missing front in {html}");
    assert_eq!(harness.client.calls(), vec!["flashcards:cell biology".to_string()]);

    harness.update(|c| c.flip_card());
    assert!(harness.render().contains("Cell division"));

    harness.update(|c| {
        c.next_card();
    });
    harness.update(|c| c.show(ActiveView::Dashboard));
    let html = harness.render();
    assert!(html.contains("2 / 2 cards"), "missing deck progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_generation_shows_notice_and_keeps_view() {
    let mut harness = setup_view_harness(FakeClient::failing());
    harness.update(|c| c.set_quiz_input("photosynthesis notes"));
    harness.submit(BusyAction::Quiz);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error generating quiz."), "missing notice in {html}");
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.active_view(), ActiveView::Dashboard);
    assert!(snapshot.quiz().is_empty());
    assert_eq!(snapshot.quiz_input(), "");

    harness.update(|c| c.dismiss_notice());
    assert!(!harness.render().contains("Error generating quiz."));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_runs_feedback_window() {
    let mut harness = setup_view_harness(FakeClient::default());
    harness.update(|c| c.set_quiz_input("astronomy"));
    harness.submit(BusyAction::Quiz);
    harness.settle().await;
    assert!(harness.render().contains("Question 1 of 2"));

    harness.answer(1);
    let html = harness.render();
    assert!(html.contains("quiz-option--correct"), "missing highlight in {html}");
    assert!(html.contains("Jupiter is a gas giant."), "missing explanation in {html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "quiz did not advance: {html}");
    assert!(!html.contains("Explanation:"), "explanation should hide: {html}");

    harness.answer(1);
    let html = harness.render();
    assert!(html.contains("quiz-option--wrong"), "missing wrong mark in {html}");
    assert!(html.contains("quiz-option--revealed"), "missing reveal in {html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("You scored 1 out of 2 (50%)"), "missing result in {html}");

    harness.close_quiz();
    let snapshot = harness.snapshot();
    assert!(snapshot.quiz().is_empty());
    assert_eq!(snapshot.active_view(), ActiveView::Dashboard);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_feedback_keeps_running_after_leaving_the_view() {
    let mut harness = setup_view_harness(FakeClient::default());
    harness.update(|c| c.set_quiz_input("astronomy"));
    harness.submit(BusyAction::Quiz);
    harness.settle().await;

    harness.answer(1);
    harness.update(|c| c.show(ActiveView::StudyBuddy));
    harness.settle().await;

    let snapshot = harness.snapshot();
    assert_eq!(snapshot.quiz().question_number(), 2);
    assert_eq!(snapshot.quiz().score(), 1);
    assert_eq!(snapshot.quiz().selected(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn study_buddy_view_smoke_renders_transcript() {
    let mut harness = setup_view_harness(FakeClient::default());
    harness.update(|c| c.show(ActiveView::StudyBuddy));
    harness.update(|c| c.set_chat_input("What is photosynthesis?"));
    harness.submit(BusyAction::Chat);

    let html = harness.render();
    assert!(html.contains("What is photosynthesis?"), "question not shown: {html}");
    assert!(html.contains("Thinking..."), "missing pending label in {html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("<strong>Photosynthesis</strong>"), "missing answer in {html}");
    assert_eq!(harness.snapshot().chat().len(), 2);
    assert_eq!(harness.snapshot().chat_input(), "");
}

#[tokio::test(flavor = "current_thread")]
async fn study_buddy_failure_is_a_transcript_entry() {
    let mut harness = setup_view_harness(FakeClient::failing());
    harness.update(|c| c.show(ActiveView::StudyBuddy));
    harness.update(|c| c.set_chat_input("x"));
    harness.submit(BusyAction::Chat);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error answering your question."), "{html}");
    assert!(!html.contains("modal-overlay"), "chat failures raise no notice: {html}");
}
