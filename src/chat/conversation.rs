//! The two message lists of the active conversation.
//!
//! `original` holds every message in the language it was stored in;
//! `displayed` is its projection into the interface language. A user turn is
//! committed in two phases: [`Conversation::begin_turn`] appends the user's
//! message right away, and the returned [`PendingTurn`] is later consumed by
//! either [`Conversation::finalize`] or [`Conversation::close_with_fallback`].

use super::message::Message;

#[derive(Debug, Default, Clone)]
pub struct Conversation {
    original: Vec<Message>,
    displayed: Vec<Message>,
}

/// A user turn waiting for the assistant's answer.
#[derive(Debug)]
#[must_use = "a pending turn must be finalized or closed with a fallback"]
pub struct PendingTurn {
    user_message_id: String,
}

impl PendingTurn {
    pub fn user_message_id(&self) -> &str {
        &self.user_message_id
    }
}

impl Conversation {
    pub fn original(&self) -> &[Message] {
        &self.original
    }

    pub fn displayed(&self) -> &[Message] {
        &self.displayed
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty() && self.displayed.is_empty()
    }

    /// Phase one: shows the user's message in both lists immediately.
    pub fn begin_turn(&mut self, user_message: Message) -> PendingTurn {
        let turn = PendingTurn {
            user_message_id: user_message.id.clone(),
        };
        self.original.push(user_message.clone());
        self.displayed.push(user_message);
        turn
    }

    /// Phase two on success: `shown` goes to the displayed list and the
    /// base-language `canonical` copy to the original list.
    pub fn finalize(&mut self, turn: PendingTurn, shown: Message, canonical: Message) {
        tracing::debug!(turn = turn.user_message_id(), reply = %shown.id, "turn finalized");
        self.displayed.push(shown);
        self.original.push(canonical);
    }

    /// Phase two on failure: closes the turn with a display-only message.
    pub fn close_with_fallback(&mut self, turn: PendingTurn, fallback: Message) {
        tracing::debug!(turn = turn.user_message_id(), "turn closed with fallback");
        self.displayed.push(fallback);
    }

    /// Replaces both lists with a loaded conversation.
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.displayed.clone_from(&messages);
        self.original = messages;
    }

    /// Replaces the displayed list with a new projection of the original list.
    pub fn project(&mut self, displayed: Vec<Message>) {
        self.displayed = displayed;
    }

    pub fn clear(&mut self) {
        self.original.clear();
        self.displayed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_begin_turn_appends_to_both_lists() {
        let mut conversation = Conversation::default();
        let turn = conversation.begin_turn(Message::user("Hello", Language::English));

        assert_eq!(conversation.original().len(), 1);
        assert_eq!(conversation.displayed().len(), 1);
        assert_eq!(turn.user_message_id(), conversation.original()[0].id);

        conversation.finalize(
            turn,
            Message::bot("2", "Hi", Language::English),
            Message::bot("2", "Hi", Language::English),
        );
    }

    #[test]
    fn test_finalize_splits_display_and_canonical() {
        let mut conversation = Conversation::default();
        let turn = conversation.begin_turn(Message::user("Bonjour", Language::French));

        conversation.finalize(
            turn,
            Message::bot("2", "Salut", Language::French),
            Message::bot("2", "Hi", Language::English),
        );

        assert_eq!(conversation.displayed()[1].content, "Salut");
        assert_eq!(conversation.original()[1].content, "Hi");
        assert_eq!(conversation.original()[1].language, Language::English);
    }

    #[test]
    fn test_fallback_only_reaches_displayed_list() {
        let mut conversation = Conversation::default();
        let turn = conversation.begin_turn(Message::user("Hello", Language::English));

        conversation.close_with_fallback(turn, Message::fallback(Language::English));

        assert_eq!(conversation.displayed().len(), 2);
        assert_eq!(conversation.original().len(), 1);
    }

    #[test]
    fn test_replace_and_clear() {
        let mut conversation = Conversation::default();
        conversation.replace(vec![
            Message::bot("1", "a", Language::English),
            Message::bot("2", "b", Language::English),
        ]);
        assert_eq!(conversation.original(), conversation.displayed());

        conversation.clear();
        assert!(conversation.is_empty());
    }
}
