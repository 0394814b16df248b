//! Client for the Zoom cloud recording API.
//!
//! Covers the recording endpoints needed to archive meetings:
//!
//! - [`Client::list_all_recordings`]: `GET /users/{userId}/recordings`, one page
//!   at a time
//! - [`Client::get_meeting_recordings`]: `GET /meetings/{meetingId}/recordings`
//! - [`Client::download_recording_file`]: streams a file from its download URL
//! - [`Client::delete_meeting_recordings`]: `DELETE /meetings/{meetingId}/recordings`
//!
//! There is no global client. Build a [`Client`] once with an
//! [`Authenticator`] and pass it where it is needed. Nothing is retried and
//! pagination is left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use zoom_recordings::{BearerToken, Client, ListAllRecordingsOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(BearerToken::new("access-token")?);
//!
//! let mut opts = ListAllRecordingsOptions {
//!     from: "2024-01-01".to_string(),
//!     to: "2024-01-31".to_string(),
//!     ..ListAllRecordingsOptions::new("me")
//! };
//! loop {
//!     let page = client.list_all_recordings(&opts).await?;
//!     for meeting in &page.meetings {
//!         for file in &meeting.recording_files {
//!             let mut out = tokio::fs::File::create(format!("{}.bin", file.id)).await?;
//!             client.download_recording_file(file, &mut out).await?;
//!         }
//!     }
//!     if !page.has_next_page() {
//!         break;
//!     }
//!     opts.next_page_token = page.next_page_token;
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod catalog;
mod client;
mod error;
mod transfer;
mod types;

pub use auth::{AuthError, Authenticator, BearerToken, Credentials};
pub use client::{Client, DEFAULT_ZOOM_API_ENDPOINT};
pub use error::{Error, Result};
pub use types::{
    CloudRecordingMeeting, DeleteMeetingRecordingsOptions, ListAllRecordingsOptions,
    ListAllRecordingsResponse, MeetingRef, RecordingFile, RecordingType, TrashType,
};
