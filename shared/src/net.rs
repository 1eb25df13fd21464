use serde::{Deserialize, Serialize};

use crate::Content;

/// A network message.
#[derive(Debug, Serialize, Deserialize)]
pub enum Message {
    /// Acknowledgement with no payload.
    Ok,
    /// The entire page [`Content`] for complete synchronisation.
    Content(Box<Content>),
    /// A [`ContentError`].
    ContentError(ContentError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_message_round_trips() {
        let message = Message::Content(Box::new(Content::catalog()));
        let encoded = serde_json::to_string(&message).unwrap();

        match serde_json::from_str(&encoded).unwrap() {
            Message::Content(content) => {
                assert_eq!(content.profile.name, Content::catalog().profile.name)
            }
            _ => panic!("expected a content message"),
        }
    }
}
