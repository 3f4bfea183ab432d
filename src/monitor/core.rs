use crate::device_camera::interface::{CameraFrame, DeviceCameraEvent};
use crate::image_classifier::error::ClassifyError;
use crate::image_classifier::interface::{Classification, ClassificationResult};
use std::time::Instant;

#[derive(Default, Clone, Debug)]
pub enum CameraState {
    #[default]
    Disconnected,
    Connected(Instant),
    Started,
}

#[derive(Default, Clone, Debug)]
pub enum Detection {
    #[default]
    Scanning,
    Sighted(Classification),
    NotDetected,
}

#[derive(Clone, Debug)]
pub enum State {
    CameraInitializing {
        camera_state: CameraState,
    },
    WaitingForFrame {
        last: Detection,
    },
    Classifying {
        last: Detection,
    },
    Faulted {
        message: String,
    },
}

#[derive(Debug)]
pub enum Event {
    CameraEvent(DeviceCameraEvent),
    CameraStartDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameArrived(CameraFrame),
    FrameClassifyDone(Result<ClassificationResult, ClassifyError>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::FrameArrived(frame) => format!(
                "FrameArrived({}x{}, {} bytes)",
                frame.width,
                frame.height,
                frame.bytes.len()
            ),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeToCameraEvents,
    SubscribeToFrames,
    StartCamera,
    ClassifyFrame { frame: CameraFrame },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyFrame { frame } => {
                format!("ClassifyFrame({} bytes)", frame.bytes.len())
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (
        State::CameraInitializing {
            camera_state: CameraState::default(),
        },
        vec![Effect::SubscribeToCameraEvents, Effect::SubscribeToFrames],
    )
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        // Camera connection handling
        (
            State::CameraInitializing { .. },
            Event::CameraEvent(DeviceCameraEvent::Connected),
        ) => (
            State::CameraInitializing {
                camera_state: CameraState::Connected(Instant::now()),
            },
            vec![Effect::StartCamera],
        ),
        (State::CameraInitializing { .. }, Event::CameraStartDone(Ok(()))) => (
            State::WaitingForFrame {
                last: Detection::Scanning,
            },
            vec![],
        ),
        (State::CameraInitializing { .. }, Event::CameraStartDone(Err(e))) => (
            State::Faulted {
                message: e.to_string(),
            },
            vec![],
        ),

        // Frame loop
        (State::WaitingForFrame { last }, Event::FrameArrived(frame)) => (
            State::Classifying { last },
            vec![Effect::ClassifyFrame { frame }],
        ),
        // Inference is non-reentrant: frames arriving while one is in
        // flight are dropped, not queued.
        (state @ State::Classifying { .. }, Event::FrameArrived(_)) => (state, vec![]),
        (
            State::Classifying { .. },
            Event::FrameClassifyDone(Ok(ClassificationResult::Labeled(classification))),
        ) => (
            State::WaitingForFrame {
                last: Detection::Sighted(classification),
            },
            vec![],
        ),
        (
            State::Classifying { .. },
            Event::FrameClassifyDone(Ok(ClassificationResult::Unclassified)),
        ) => (
            State::WaitingForFrame {
                last: Detection::NotDetected,
            },
            vec![],
        ),
        // A bad frame never stops the loop; keep the previous detection.
        (State::Classifying { last }, Event::FrameClassifyDone(Err(_))) => (
            State::WaitingForFrame { last },
            vec![],
        ),

        // A faulted session stays faulted.
        (state @ State::Faulted { .. }, _) => (state, vec![]),

        (_, Event::CameraEvent(DeviceCameraEvent::Disconnected)) => (
            State::CameraInitializing {
                camera_state: CameraState::Disconnected,
            },
            vec![],
        ),

        // Default case
        (state, _) => (state, vec![]),
    }
}
