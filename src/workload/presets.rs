//! Named workload profiles.
//!
//! The classroom mixes pair naturally with the default threshold of 2; the
//! AI profiles are calibrated for a threshold of 7, where only the genuinely
//! heavy model invocations route to fast units.

use crate::workload::TaskSpec;

fn build(pairs: &[(&str, f64)]) -> Vec<TaskSpec> {
    pairs.iter().copied().map(Into::into).collect()
}

/// The flagship classroom mix: seven tasks spanning difficulty 1 to 5.
#[must_use]
pub fn classroom() -> Vec<TaskSpec> {
    build(&[
        ("TranscribeDebate", 5.0),
        ("RenderQuiz", 2.0),
        ("EvaluateEssay", 3.0),
        ("GenerateFeedback", 4.0),
        ("MapGraph", 1.0),
        ("AudioSummary", 4.0),
        ("SpeechToText", 5.0),
    ])
}

/// The classroom mix plus a data-processing batch and trailing light work,
/// used for comparing core-mix configurations.
#[must_use]
pub fn extended_classroom() -> Vec<TaskSpec> {
    let mut tasks = classroom();
    tasks.extend(build(&[
        ("DataProcessing", 6.0),
        ("LightTask1", 1.0),
        ("LightTask2", 1.0),
    ]));
    tasks
}

/// A full day of instruction tooling: heavy morning model calls, a mixed
/// afternoon, light interactive evening work.
#[must_use]
pub fn edtech_day() -> Vec<TaskSpec> {
    build(&[
        ("GPT-4-Reasoning", 12.0),
        ("EssayGrading-AI", 9.0),
        ("Whisper-Large-V3", 10.0),
        ("MathSolver-WolframAlpha", 13.0),
        ("PersonalizedTutor", 11.0),
        ("CodeReview-Copilot", 8.0),
        ("YOLO-ObjectDetection", 9.0),
        ("QuizGeneration-AI", 6.0),
        ("Claude-3-Analysis", 10.0),
        ("TTS-ElevenLabs", 7.0),
        ("Basic-Translation", 4.0),
        ("BERT-Sentiment", 6.0),
        ("Simple-Summarization", 5.0),
        ("Spell-Check", 2.0),
        ("Keyword-Extraction", 3.0),
        ("ResNet-ImageClassify", 7.0),
    ])
}

/// Latency-sensitive interactive tasks: transcription, live assistance,
/// lightweight text utilities.
#[must_use]
pub fn realtime_interactive() -> Vec<TaskSpec> {
    build(&[
        ("Whisper-Large-V3", 10.0),
        ("GPT-3.5-Turbo", 8.0),
        ("FaceNet-Recognition", 8.0),
        ("BERT-Sentiment", 6.0),
        ("Spell-Check", 2.0),
        ("Basic-Translation", 4.0),
        ("Keyword-Extraction", 3.0),
    ])
}

/// Research batch work: uniformly heavy analysis and generation tasks.
#[must_use]
pub fn research_batch() -> Vec<TaskSpec> {
    build(&[
        ("GPT-4-Reasoning", 12.0),
        ("StyleGAN-Generation", 15.0),
        ("AudioSeparation", 11.0),
        ("MathSolver-WolframAlpha", 13.0),
        ("Claude-3-Analysis", 10.0),
        ("CodeReview-Copilot", 8.0),
    ])
}
