use dioxus::prelude::*;
use services::{BusyAction, DashboardController};
use tracing::debug;

use crate::context::AppContext;

/// Controller operations that outlive a single view.
///
/// Built once in the layout so that requests and the quiz feedback timer keep
/// running when the learner switches views mid-flight.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardActions {
    pub submit: Callback<BusyAction>,
    pub answer: Callback<usize>,
    pub close_quiz: Callback<()>,
}

pub fn use_dashboard_actions(
    controller: Signal<DashboardController>,
    ctx: &AppContext,
) -> DashboardActions {
    let feedback_task = use_signal(|| None::<Task>);

    let close_quiz = use_callback(move |()| {
        let mut controller = controller;
        cancel_feedback(feedback_task);
        controller.write().close_quiz();
    });

    let submit = {
        let client = ctx.content_client();
        use_callback(move |action: BusyAction| {
            let mut controller = controller;
            let client = client.clone();
            match action {
                BusyAction::Flashcards => {
                    let Ok(notes) = controller.write().begin_flashcards() else {
                        return;
                    };
                    spawn(async move {
                        let result = client.generate_flashcards(&notes).await;
                        let outcome = controller.write().finish_flashcards(result);
                        debug!(?outcome, "flashcard request settled");
                    });
                }
                BusyAction::Quiz => {
                    let Ok(text) = controller.write().begin_quiz() else {
                        return;
                    };
                    spawn(async move {
                        let result = client.generate_quiz(&text).await;
                        let loaded = result.is_ok();
                        if loaded {
                            cancel_feedback(feedback_task);
                        }
                        let outcome = controller.write().finish_quiz(result);
                        debug!(?outcome, "quiz request settled");
                    });
                }
                BusyAction::Chat => {
                    let Ok(request) = controller.write().begin_chat() else {
                        return;
                    };
                    spawn(async move {
                        let answer = client.ask_question(&request.question).await;
                        controller.write().finish_chat(request, answer);
                    });
                }
            }
        })
    };

    let answer = {
        let window = ctx.feedback_window();
        use_callback(move |index: usize| {
            let mut controller = controller;
            let mut feedback_task = feedback_task;
            let ticket = match controller.write().answer_quiz(index) {
                Ok(ticket) => ticket,
                Err(err) => {
                    debug!(%err, index, "quiz answer ignored");
                    return;
                }
            };
            cancel_feedback(feedback_task);
            let task = spawn(async move {
                tokio::time::sleep(window).await;
                match controller.write().finish_quiz_feedback(ticket) {
                    Ok(step) => debug!(?step, "quiz feedback elapsed"),
                    Err(err) => debug!(%err, "quiz feedback dropped"),
                }
            });
            feedback_task.set(Some(task));
        })
    };

    DashboardActions {
        submit,
        answer,
        close_quiz,
    }
}

fn cancel_feedback(mut feedback_task: Signal<Option<Task>>) {
    if let Some(task) = feedback_task.take() {
        task.cancel();
    }
}
