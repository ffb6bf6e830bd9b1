use leptos::prelude::*;

use super::StepPanel;
use crate::core::models::Run;
use crate::core::theme::{Theme, Tone};
use crate::features::run_detail::services::{group_into_steps, StepBuckets};
use crate::features::runs::RunStatusIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StageState {
    Complete,
    Active,
    Pending,
}

fn stage_state(position: usize, active: usize) -> StageState {
    match position.cmp(&active) {
        std::cmp::Ordering::Less => StageState::Complete,
        std::cmp::Ordering::Equal => StageState::Active,
        std::cmp::Ordering::Greater => StageState::Pending,
    }
}

#[component]
pub fn RunStepper(run: Run, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let buckets = StepBuckets::assign(&run.events);
    let active = buckets.progress_index();
    let stages: Vec<(String, usize)> = buckets
        .iter()
        .map(|(producer, events)| (producer.display_name().to_string(), events.len()))
        .collect();
    let steps = group_into_steps(&run.events);
    let has_steps = !steps.is_empty();

    view! {
        <div class="run-detail">
            <header class="run-detail-header">
                <RunStatusIcon status=run.status theme=theme />
                <span>{format!("Run {}", run.id)}</span>
                <span style=move || format!("color: {};", theme.get().muted_text())>{run.display_start_time()}</span>
            </header>

            <ol class="pipeline-stepper">
                {stages
                    .into_iter()
                    .enumerate()
                    .map(|(position, (label, event_count))| {
                        let state = stage_state(position, active);
                        view! {
                            <li
                                class="pipeline-stage"
                                title=format!("{} events", event_count)
                                class:complete={state == StageState::Complete}
                                class:active={state == StageState::Active}
                                style=move || {
                                    let theme = theme.get();
                                    match state {
                                        StageState::Pending => format!("color: {};", theme.muted_text()),
                                        _ => format!("color: {};", theme.accent(Tone::Teal).emphasis),
                                    }
                                }
                            >
                                <span class="stage-marker">
                                    {if state == StageState::Complete { "✓".to_string() } else { (position + 1).to_string() }}
                                </span>
                                <span class="stage-label">{label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            {if has_steps {
                steps
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| view! { <StepPanel index=index step=step theme=theme /> })
                    .collect_view()
                    .into_any()
            } else {
                view! { <p class="empty-state">"No events recorded for this run yet."</p> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Producer;

    #[test]
    fn stages_before_progress_are_complete() {
        let states: Vec<_> = (0..Producer::PIPELINE.len()).map(|p| stage_state(p, 2)).collect();
        assert_eq!(
            states,
            vec![StageState::Complete, StageState::Complete, StageState::Active, StageState::Pending]
        );
    }

    #[test]
    fn finished_pipeline_marks_every_stage_complete() {
        assert!((0..4).all(|p| stage_state(p, 4) == StageState::Complete));
    }
}
