use crate::models::{Message, MessageId, Sender};

/// A piece of message text as the view should emit it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Rendered as an escaped text node.
    Text(&'a str),
    /// Rendered as `<br/>`.
    LineBreak,
}

/// Splits `text` on `\n`, one [`Segment::LineBreak`] per newline.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        if !line.is_empty() {
            out.push(Segment::Text(line));
        }
    }
    out
}

/// View model for one transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageView {
    pub css_class: &'static str,
    pub text: String,
    pub feedback_target: Option<MessageId>,
}

impl From<&Message> for MessageView {
    fn from(m: &Message) -> Self {
        Self {
            css_class: css_class(m.sender),
            text: m.text.clone(),
            feedback_target: m.feedback_target(),
        }
    }
}

pub fn css_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "message user",
        Sender::Bot => "message bot",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::APOLOGY;

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(
            segments("a\nb"),
            vec![Segment::Text("a"), Segment::LineBreak, Segment::Text("b")]
        );
        assert_eq!(
            segments("x\n\n"),
            vec![Segment::Text("x"), Segment::LineBreak, Segment::LineBreak]
        );
        assert!(segments("").is_empty());
    }

    #[test]
    fn markup_stays_text() {
        assert_eq!(segments("<b>hi</b>"), vec![Segment::Text("<b>hi</b>")]);
    }

    #[test]
    fn apology_renders_without_feedback_controls() {
        let view = MessageView::from(&Message::bot(APOLOGY, None));
        assert_eq!(view.css_class, "message bot");
        assert_eq!(view.feedback_target, None);

        let view = MessageView::from(&Message::bot("answer", Some(MessageId(3))));
        assert_eq!(view.feedback_target, Some(MessageId(3)));
    }
}
