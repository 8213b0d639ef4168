use super::*;
use crate::service::lookup::embed::{submission_embed, COMPLETED_COLOR, UNCLAIMED_COLOR};
use test_utils::factory::{SubmissionFactory, TranscriptionFactory};

fn submission(factory: SubmissionFactory) -> Submission {
    serde_json::from_value(factory.build()).unwrap()
}

fn transcription(factory: TranscriptionFactory) -> Transcription {
    serde_json::from_value(factory.build()).unwrap()
}

fn field<'v>(embed: &'v serde_json::Value, name: &str) -> Option<&'v str> {
    embed["fields"]
        .as_array()?
        .iter()
        .find(|field| field["name"] == name)?["value"]
        .as_str()
}

/// Tests the embed of an unclaimed submission.
///
/// Expected: Orange embed with status, OCR and archive flags and the partner link
#[test]
fn unclaimed_submission_embed() {
    let submission = submission(
        SubmissionFactory::new(1)
            .url("https://reddit.com/r/CuratedTumblr/comments/abc/title/")
            .content_url("https://i.redd.it/image.png"),
    );

    let embed = serde_json::to_value(submission_embed(&submission, None, &[])).unwrap();

    assert_eq!(embed["color"], UNCLAIMED_COLOR.0);
    assert_eq!(field(&embed, "Status"), Some("Unclaimed"));
    assert_eq!(field(&embed, "OCR"), Some("No"));
    assert_eq!(field(&embed, "Archived"), Some("No"));
    assert_eq!(
        field(&embed, "Partner Post"),
        Some("[Link](https://reddit.com/r/CuratedTumblr/comments/abc/title/)")
    );
    assert_eq!(field(&embed, "Transcription"), None);
    assert_eq!(embed["image"]["url"], "https://i.redd.it/image.png");
    assert_eq!(embed["author"]["name"], "r/CuratedTumblr");
}

/// Tests the embed of a completed submission with its transcriptions.
///
/// Verifies that the volunteer's transcription is preferred over the OCR one and
/// its content is used as description.
///
/// Expected: Green embed linking the volunteer and their transcription
#[test]
fn completed_submission_embed() {
    let submission = submission(SubmissionFactory::new(1).completed_by(5));
    let volunteer: Volunteer =
        serde_json::from_value(factory::create_volunteer(5, "transcriber")).unwrap();
    let transcriptions = vec![
        transcription(
            TranscriptionFactory::new(1, 1, 5)
                .url("https://reddit.com/r/sub/comments/a/b/human/"),
        ),
        transcription(TranscriptionFactory::new(2, 1, 3).text("OCR output")),
    ];

    let embed =
        serde_json::to_value(submission_embed(&submission, Some(&volunteer), &transcriptions))
            .unwrap();

    assert_eq!(embed["color"], COMPLETED_COLOR.0);
    assert_eq!(
        field(&embed, "Status"),
        Some("Completed by [transcriber](https://reddit.com/u/transcriber)")
    );
    assert_eq!(embed["description"], "Hello world");
    assert_eq!(
        field(&embed, "Transcription"),
        Some("[Link](https://reddit.com/r/sub/comments/a/b/human/)")
    );
}

/// Tests that the OCR transcription is used when the volunteer's is missing.
#[test]
fn falls_back_to_last_transcription() {
    let submission = submission(SubmissionFactory::new(1).completed_by(5));
    let transcriptions = vec![transcription(
        TranscriptionFactory::new(2, 1, 3).text("OCR output"),
    )];

    let main = main_transcription(&submission, &transcriptions);

    assert_eq!(main.map(|tr| tr.id), Some(2));
}
