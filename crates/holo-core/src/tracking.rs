use crate::gesture::{Gesture, GestureClassifier};
use crate::hands::HandPose;
use crate::interaction::{ControlMode, InteractionBus, InteractionVector};
use crate::tracer::{ShapeConstruction, ShapeTracer, TracerParams};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackingOutput {
    pub interaction: InteractionVector,
    pub gesture: Option<Gesture>,
    pub construction: Option<ShapeConstruction>,
}

/// Per-sample hand pipeline: two-hand tracing first, single-hand gestures
/// only when no construction is active.
#[derive(Clone, Debug, Default)]
pub struct HandTracker {
    pub classifier: GestureClassifier,
    pub tracer: ShapeTracer,
}

impl HandTracker {
    pub fn new(params: TracerParams) -> Self {
        Self {
            classifier: GestureClassifier::new(),
            tracer: ShapeTracer::new(params),
        }
    }

    pub fn process(&mut self, hands: &[HandPose], now_ms: u64) -> TrackingOutput {
        if let Some(construction) = self.tracer.update(hands, now_ms) {
            let construction = construction.clone();
            // two-hand mode owns the output; drop single-hand history
            self.classifier.reset();
            return TrackingOutput {
                interaction: InteractionVector::INACTIVE,
                gesture: None,
                construction: Some(construction),
            };
        }
        let (interaction, gesture) = self.classifier.classify(hands.first());
        TrackingOutput {
            interaction,
            gesture,
            construction: None,
        }
    }

    /// Process a sample and publish the result as the gesture source.
    pub fn process_and_publish(
        &mut self,
        hands: &[HandPose],
        now_ms: u64,
        bus: &InteractionBus,
    ) -> TrackingOutput {
        let out = self.process(hands, now_ms);
        bus.publish_tracking(
            ControlMode::Gesture,
            out.interaction,
            out.construction.clone(),
        );
        out
    }
}
