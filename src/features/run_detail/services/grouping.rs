use crate::core::models::{Event, Producer};

/// Consecutive events attributed to one agent, as shown in the run detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub producer: Producer,
    pub events: Vec<Event>,
}

impl Step {
    pub fn title(&self) -> &str {
        self.producer.display_name()
    }
}

/// Splits events into steps of consecutive same-producer events.
///
/// Tool-call events never open a step: they join whatever step is open,
/// and do not change which producer that step belongs to. Events from
/// producers outside the pipeline are kept and get a step of their own, so
/// flattening the result always gives back `events`. Tool calls before the
/// first agent event form a leading "Tool Calls" step.
pub fn group_into_steps(events: &[Event]) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut current: Option<Producer> = None;
    let mut buffer: Vec<Event> = Vec::new();

    for event in events {
        let producer = event.producer();
        let joins_current =
            buffer.is_empty() || producer.is_tool_call() || current.as_ref() == Some(&producer);

        if !joins_current {
            steps.push(Step {
                producer: current.clone().unwrap_or(Producer::CallTool),
                events: std::mem::take(&mut buffer),
            });
        }
        if !producer.is_tool_call() {
            current = Some(producer);
        }
        buffer.push(event.clone());
    }

    if !buffer.is_empty() {
        steps.push(Step {
            producer: current.unwrap_or(Producer::CallTool),
            events: buffer,
        });
    }
    steps
}

/// One bucket per pipeline agent, used to track how far a run got.
///
/// Tool calls land in the bucket of the last agent event before them.
/// Events from producers outside the pipeline are left out, along with
/// tool calls that follow them or that come before any agent event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepBuckets {
    buckets: [Vec<Event>; 4],
}

impl StepBuckets {
    pub fn assign(events: &[Event]) -> Self {
        let mut buckets: [Vec<Event>; 4] = Default::default();
        let mut last_stage: Option<usize> = None;

        for event in events {
            let producer = event.producer();
            if !producer.is_tool_call() {
                last_stage = producer.pipeline_position();
            }
            match last_stage {
                Some(stage) => buckets[stage].push(event.clone()),
                None => tracing::debug!(
                    "event {} from {} is outside the pipeline",
                    event.id,
                    producer.key()
                ),
            }
        }

        Self { buckets }
    }

    pub fn bucket(&self, producer: &Producer) -> &[Event] {
        producer
            .pipeline_position()
            .map(|stage| self.buckets[stage].as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Producer, &[Event])> {
        Producer::PIPELINE
            .into_iter()
            .zip(self.buckets.iter().map(Vec::as_slice))
    }

    /// Position of the progress indicator: the number of agents that produced anything.
    pub fn progress_index(&self) -> usize {
        self.buckets.iter().filter(|bucket| !bucket.is_empty()).count()
    }
}
