use std::fmt::Write;

use super::language::TargetLanguage;
use super::translator::WidgetSnapshot;

/// Render the widget page for session `uid`.
///
/// The form posts back to `/widget/{uid}`. The result area is `readonly`
/// and carries no `name`, so it is never part of a submission.
pub fn render_widget(uid: &str, snapshot: &WidgetSnapshot) -> String {
    let mut options = String::new();
    for lang in TargetLanguage::ALL {
        let selected = if lang.code() == snapshot.selected_language {
            " selected"
        } else {
            ""
        };
        // Writing into a String cannot fail
        let _ = writeln!(
            options,
            r#"        <option value="{}"{}>{}</option>"#,
            lang.code(),
            selected,
            lang.label()
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Live Language Translator</title>
</head>
<body>
  <form method="post" action="/widget/{uid}">
    <section>
      <h2>Extracted Text</h2>
      <textarea name="text" rows="4">{source}</textarea>
    </section>
    <section>
      <label for="target">Select Language:</label>
      <select id="target" name="target">
{options}      </select>
      <button type="submit">Translate</button>
    </section>
  </form>
  <section>
    <h2>Translated Text</h2>
    <textarea rows="4" readonly>{translated}</textarea>
  </section>
</body>
</html>
"#,
        uid = escape_html(uid),
        source = escape_html(&snapshot.source_text),
        options = options,
        translated = escape_html(&snapshot.translated_text),
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(source: &str, translated: &str, lang: &str) -> WidgetSnapshot {
        WidgetSnapshot {
            source_text: source.to_string(),
            translated_text: translated.to_string(),
            selected_language: lang.to_string(),
        }
    }

    #[test]
    fn renders_all_seven_options_in_order() {
        let html = render_widget("abc", &snapshot("", "", "en"));
        assert_eq!(html.matches("<option ").count(), 7);

        let positions: Vec<usize> = ["English", "French", "German", "Spanish", "Hindi", "Chinese", "Arabic"]
            .iter()
            .map(|label| html.find(&format!(">{}</option>", label)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn marks_selected_language() {
        let html = render_widget("abc", &snapshot("", "", "zh"));
        assert!(html.contains(r#"<option value="zh" selected>Chinese</option>"#));
        assert_eq!(html.matches(" selected>").count(), 1);
    }

    #[test]
    fn result_area_is_read_only_and_not_submitted() {
        let html = render_widget("abc", &snapshot("Hello", "Bonjour", "fr"));
        assert!(html.contains(r#"<textarea rows="4" readonly>Bonjour</textarea>"#));
        assert!(html.contains(r#"<textarea name="text" rows="4">Hello</textarea>"#));
        assert_eq!(html.matches("name=\"text\"").count(), 1);
        assert!(html.contains(r#"<button type="submit">Translate</button>"#));
        assert!(html.contains(r#"action="/widget/abc""#));
    }

    #[test]
    fn escapes_user_text() {
        let html = render_widget("abc", &snapshot("<script>alert('x')</script>", "a & b", "en"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
