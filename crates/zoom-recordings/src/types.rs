//! Type definitions for Zoom cloud recording requests and responses.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of view captured by a recording file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordingType {
    #[serde(rename = "shared_screen_with_speaker_view(CC)")]
    SharedScreenWithSpeakerViewCc,
    #[serde(rename = "shared_screen_with_speaker_view")]
    SharedScreenWithSpeakerView,
    #[serde(rename = "shared_screen_with_gallery_view")]
    SharedScreenWithGalleryView,
    #[serde(rename = "speaker_view")]
    SpeakerView,
    #[serde(rename = "gallery_view")]
    GalleryView,
    #[serde(rename = "shared_screen")]
    SharedScreen,
    #[serde(rename = "audio_only")]
    AudioOnly,
    #[serde(rename = "audio_transcript")]
    AudioTranscript,
    #[serde(rename = "chat_file")]
    ChatFile,
    #[serde(rename = "TIMELINE")]
    Timeline,
    /// Any value Zoom adds after this list was written.
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl RecordingType {
    /// Wire representation of the recording type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SharedScreenWithSpeakerViewCc => "shared_screen_with_speaker_view(CC)",
            Self::SharedScreenWithSpeakerView => "shared_screen_with_speaker_view",
            Self::SharedScreenWithGalleryView => "shared_screen_with_gallery_view",
            Self::SpeakerView => "speaker_view",
            Self::GalleryView => "gallery_view",
            Self::SharedScreen => "shared_screen",
            Self::AudioOnly => "audio_only",
            Self::AudioTranscript => "audio_transcript",
            Self::ChatFile => "chat_file",
            Self::Timeline => "TIMELINE",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RecordingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which trash listing to query when `trash` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrashType {
    /// Whole meetings moved to the trash (server default).
    #[default]
    MeetingRecordings,
    /// Individual files moved to the trash.
    RecordingFile,
}

impl TrashType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MeetingRecordings => "meeting_recordings",
            Self::RecordingFile => "recording_file",
        }
    }
}

impl fmt::Display for TrashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrashType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meeting_recordings" => Ok(Self::MeetingRecordings),
            "recording_file" => Ok(Self::RecordingFile),
            other => Err(Error::InvalidInput(format!(
                "unknown trash type '{other}' (expected meeting_recordings or recording_file)"
            ))),
        }
    }
}

/// One physical artifact of a recorded meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingFile {
    /// File ID
    pub id: String,
    /// UUID of the meeting this file belongs to
    pub meeting_id: String,
    /// Recording start time
    pub recording_start: Option<String>,
    /// Recording end time
    pub recording_end: Option<String>,
    /// File type (e.g., "MP4", "M4A", "TRANSCRIPT", "CHAT", "TIMELINE")
    pub file_type: String,
    /// File size in bytes
    pub file_size: i64,
    /// File extension (e.g., "MP4", "VTT", "JSON")
    pub file_extension: String,
    /// URL for playing the file in a browser
    pub play_url: String,
    /// URL the file bytes can be fetched from. Private or passcode-protected
    /// recordings require an authenticated request.
    pub download_url: String,
    /// Processing status (e.g., "completed")
    pub status: String,
    /// When the file was moved to the trash
    pub deleted_time: Option<String>,
    pub recording_type: Option<RecordingType>,
}

/// One recorded meeting instance with its files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudRecordingMeeting {
    /// Meeting instance UUID
    pub uuid: String,
    /// Meeting ID
    pub id: i64,
    pub account_id: String,
    pub host_id: String,
    pub topic: String,
    pub start_time: Option<String>,
    /// Meeting duration in minutes
    pub duration: i64,
    /// Total size of all files in bytes
    pub total_size: i64,
    pub recording_count: i64,
    /// Files in the order the server returned them
    pub recording_files: Vec<RecordingFile>,
}

/// One page of `GET /users/{userId}/recordings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAllRecordingsResponse {
    /// Start of the date range actually served (`YYYY-MM-DD`)
    pub from: Option<String>,
    /// End of the date range actually served (`YYYY-MM-DD`)
    pub to: Option<String>,
    pub page_count: i64,
    pub page_size: i64,
    pub total_records: i64,
    /// Token for the next page; empty when this is the last page
    pub next_page_token: String,
    pub meetings: Vec<CloudRecordingMeeting>,
}

impl ListAllRecordingsResponse {
    pub fn has_next_page(&self) -> bool {
        !self.next_page_token.is_empty()
    }
}

/// Query for [`Client::list_all_recordings`](crate::Client::list_all_recordings).
///
/// Every field except `user_id` becomes a query parameter and is left out of
/// the request while it holds its zero value.
///
/// `from` and `to` are plain `YYYY-MM-DD` strings. They are sent exactly as
/// given and never parsed. Zoom silently clamps ranges longer than 30 days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAllRecordingsOptions {
    /// User ID, email address, or `me`. Used as a path segment.
    #[serde(skip)]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
    /// Query metadata flag, passed through untouched.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mc: String,
    /// List recordings from the trash instead of the live set.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub trash: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trash_type: Option<TrashType>,
}

impl ListAllRecordingsOptions {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }
}

/// Query for [`Client::delete_meeting_recordings`](crate::Client::delete_meeting_recordings).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeleteMeetingRecordingsOptions {
    #[serde(skip)]
    pub meeting_id: i64,
    /// `false` moves the recordings to the trash, `true` deletes them for good.
    #[serde(rename = "Delete", skip_serializing_if = "std::ops::Not::not")]
    pub delete: bool,
}

/// Address of a single meeting's recordings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingRef {
    /// Numeric meeting ID; resolves to the latest instance.
    Id(i64),
    /// Meeting instance UUID.
    Uuid(String),
}

impl From<i64> for MeetingRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl FromStr for MeetingRef {
    type Err = Error;

    /// All-digit input is a meeting ID, anything else a UUID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidInput("meeting must not be empty".to_string()));
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            let id = s
                .parse()
                .map_err(|_| Error::InvalidInput(format!("meeting ID '{s}' is out of range")))?;
            Ok(Self::Id(id))
        } else {
            Ok(Self::Uuid(s.to_string()))
        }
    }
}

impl MeetingRef {
    /// Path segment for `/meetings/{meeting}/...`, before URL encoding.
    ///
    /// UUIDs that start with `/` or contain `//` must reach Zoom
    /// double-encoded, so they are encoded once here and again when pushed
    /// onto the URL.
    pub(crate) fn path_segment(&self) -> Result<String, Error> {
        match self {
            Self::Id(id) => {
                if *id <= 0 {
                    return Err(Error::InvalidInput(
                        "meeting_id must be positive".to_string(),
                    ));
                }
                Ok(id.to_string())
            }
            Self::Uuid(uuid) => {
                if uuid.trim().is_empty() {
                    return Err(Error::InvalidInput(
                        "meeting uuid must not be empty".to_string(),
                    ));
                }
                if uuid.starts_with('/') || uuid.contains("//") {
                    Ok(url::form_urlencoded::byte_serialize(uuid.as_bytes()).collect())
                } else {
                    Ok(uuid.clone())
                }
            }
        }
    }
}
