//! TwiML rendering for inbound call webhooks

use vocalis::DialInstruction;

/// Render a `<Dial>` bridging the call to the instruction's destination
pub fn render_dial(dial: &DialInstruction) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<Response><Dial callerId="{caller_id}"><Number>{destination}</Number></Dial></Response>"#,
        ),
        caller_id = escape_xml(&dial.caller_id),
        destination = escape_xml(&dial.destination),
    )
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dial() {
        let dial = DialInstruction::new("+15550100", Some("+15550199".to_string()));
        assert_eq!(
            render_dial(&dial),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response>\
             <Dial callerId=\"+15550100\"><Number>+15550199</Number></Dial></Response>"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let dial = DialInstruction::new("\"><Hangup/>", None);
        let twiml = render_dial(&dial);
        assert!(!twiml.contains("<Hangup/>"));
        assert!(twiml.contains("&quot;&gt;&lt;Hangup/&gt;"));
    }
}
