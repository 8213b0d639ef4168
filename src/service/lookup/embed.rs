use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor};

use crate::{
    model::{
        submission::{Submission, SubmissionStatus},
        transcription::Transcription,
        volunteer::Volunteer,
    },
    service::lookup::main_transcription,
    strings::find,
    util::format::limit_str,
};

pub const UNCLAIMED_COLOR: Colour = Colour::from_rgb(255, 176, 0);
pub const CLAIMED_COLOR: Colour = Colour::from_rgb(13, 211, 187);
pub const COMPLETED_COLOR: Colour = Colour::from_rgb(148, 224, 68);

/// Maximum length of the transcription excerpt in the embed.
const DESCRIPTION_LIMIT: usize = 200;

/// Builds the embed describing a submission.
///
/// The embed is built in stages while `/find` fetches more data, so the volunteer
/// and transcriptions are optional.
///
/// # Arguments
/// - `submission` - The submission to describe
/// - `volunteer` - The volunteer working on it, if fetched yet
/// - `transcriptions` - Its transcriptions, empty if not fetched yet
///
/// # Returns
/// - `CreateEmbed` - Embed colored by status with links to the posts
pub fn submission_embed(
    submission: &Submission,
    volunteer: Option<&Volunteer>,
    transcriptions: &[Transcription],
) -> CreateEmbed {
    let link = volunteer.map(Volunteer::formatted_link);

    let (color, status) = match submission.status() {
        SubmissionStatus::Unclaimed => (UNCLAIMED_COLOR, find::STATUS_UNCLAIMED.to_string()),
        SubmissionStatus::Claimed => (
            CLAIMED_COLOR,
            link.as_deref()
                .map(find::claimed_by)
                .unwrap_or_else(|| find::STATUS_CLAIMED.to_string()),
        ),
        SubmissionStatus::Completed => (
            COMPLETED_COLOR,
            link.as_deref()
                .map(find::completed_by)
                .unwrap_or_else(|| find::STATUS_COMPLETED.to_string()),
        ),
    };

    let mut embed = CreateEmbed::new()
        .color(color)
        .field("Status", status, true)
        .field("OCR", find::yes_no(submission.has_ocr_transcription), true)
        .field("Archived", find::yes_no(submission.archived), true);

    let main_tr = main_transcription(submission, transcriptions);

    if let Some(tr) = main_tr {
        embed = embed.description(limit_str(&tr.content(), DESCRIPTION_LIMIT));
    }
    if let Some(content_url) = &submission.content_url {
        embed = embed.image(content_url);
    }
    if let Some(tor_url) = &submission.tor_url {
        embed = embed.field("ToR Post", format!("[Link]({tor_url})"), true);
    }
    if let Some(url) = &submission.url {
        embed = embed.field("Partner Post", format!("[Link]({url})"), true);
    }
    if let Some(tr_url) = main_tr.and_then(|tr| tr.url.as_deref()) {
        embed = embed.field("Transcription", format!("[Link]({tr_url})"), true);
    }
    if let Some(subreddit) = submission.subreddit() {
        embed = embed.author(
            CreateEmbedAuthor::new(format!("r/{subreddit}"))
                .url(format!("https://reddit.com/r/{subreddit}")),
        );
    }

    embed
}
