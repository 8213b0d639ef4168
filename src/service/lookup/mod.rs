//! Finding submissions from Reddit links.
//!
//! A link can point to the post on r/TranscribersOfReddit, to the post on the
//! partner subreddit or to the transcription comment on the partner post. Blossom
//! stores every link in the normalized form `https://reddit.com<path>/`.

pub mod embed;

#[cfg(test)]
mod test;

use url::Url;

use crate::{
    data::blossom::{BlossomClient, SubmissionRepository, TranscriptionRepository, VolunteerRepository},
    error::blossom::BlossomError,
    model::{submission::Submission, transcription::Transcription, volunteer::Volunteer},
    util::parse::get_id_from_url,
};

/// Path segments of a link to a comment: `/r/<sub>/comments/<id>/<title>/<comment>/`.
const COMMENT_PATH_SEGMENTS: usize = 8;
const TOR_SUBREDDIT_PATH: &str = "/r/TranscribersOfReddit";

/// The kind of Reddit link given by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedditLink {
    /// Post on r/TranscribersOfReddit.
    TorPost(String),
    /// Transcription comment on a partner post.
    Transcription(String),
    /// Post on a partner subreddit.
    PartnerPost(String),
}

/// Classifies the link and normalizes it to the form Blossom stores.
///
/// # Returns
/// - `Some(RedditLink)` - The link points to Reddit
/// - `None` - The input isn't a URL or doesn't point to Reddit
pub fn parse_reddit_link(reddit_url: &str) -> Option<RedditLink> {
    let url = Url::parse(reddit_url.trim()).ok()?;
    if !url.host_str()?.contains("reddit") {
        return None;
    }

    let mut path = url.path().to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    let normalized = format!("https://reddit.com{path}");

    // Splitting `/a/b/` yields empty strings at both ends, like the segment count
    // of the comment path above assumes.
    let link = if path.contains(TOR_SUBREDDIT_PATH) {
        RedditLink::TorPost(normalized)
    } else if path.split('/').count() >= COMMENT_PATH_SEGMENTS {
        RedditLink::Transcription(normalized)
    } else {
        RedditLink::PartnerPost(normalized)
    };

    Some(link)
}

pub struct LookupService<'a> {
    client: &'a BlossomClient,
}

impl<'a> LookupService<'a> {
    pub fn new(client: &'a BlossomClient) -> Self {
        Self { client }
    }

    /// Finds the submission the Reddit link points to.
    ///
    /// Links to transcriptions are resolved through the transcription, which
    /// references its submission.
    ///
    /// # Returns
    /// - `Ok(Some(Submission))` - The submission was found
    /// - `Ok(None)` - The link doesn't point to Reddit or Blossom doesn't know it
    /// - `Err(BlossomError)` - A request failed
    pub async fn find_submission_by_url(&self, reddit_url: &str) -> Result<Option<Submission>, BlossomError> {
        let Some(link) = parse_reddit_link(reddit_url) else {
            return Ok(None);
        };
        let submissions = SubmissionRepository::new(self.client);

        match link {
            RedditLink::TorPost(url) => submissions.find_one(&[("tor_url", url)]).await,
            RedditLink::PartnerPost(url) => submissions.find_one(&[("url", url)]).await,
            RedditLink::Transcription(url) => {
                let transcriptions = TranscriptionRepository::new(self.client)
                    .find_all(&[("url", url)])
                    .await?;
                let Some(submission_id) = transcriptions
                    .first()
                    .and_then(|tr| get_id_from_url(&tr.submission))
                else {
                    return Ok(None);
                };

                submissions
                    .find_one(&[("id", submission_id.to_string())])
                    .await
            }
        }
    }

    /// Fetches the volunteer who completed the submission, or else who claimed it.
    pub async fn fetch_volunteer(&self, submission: &Submission) -> Result<Option<Volunteer>, BlossomError> {
        let Some(volunteer_id) = submission
            .completed_by
            .as_deref()
            .or(submission.claimed_by.as_deref())
            .and_then(get_id_from_url)
        else {
            return Ok(None);
        };

        VolunteerRepository::new(self.client)
            .find_by_id(volunteer_id)
            .await
    }

    /// Fetches all transcriptions of the submission, including OCR.
    pub async fn fetch_transcriptions(&self, submission: &Submission) -> Result<Vec<Transcription>, BlossomError> {
        TranscriptionRepository::new(self.client)
            .find_all(&[("submission", submission.id.to_string())])
            .await
    }
}

/// Picks the transcription that completed the submission.
///
/// That is the transcription of the completing volunteer. Falls back to the last
/// transcription, which usually is the OCR one.
pub fn main_transcription<'t>(
    submission: &Submission,
    transcriptions: &'t [Transcription],
) -> Option<&'t Transcription> {
    if let Some(completed_by) = &submission.completed_by {
        if let Some(transcription) = transcriptions.iter().find(|tr| &tr.author == completed_by) {
            return Some(transcription);
        }
    }

    transcriptions.last()
}
