use html_escape::encode_text;
use crate::locale;
use crate::report::{Item, Sections};

/// Class of the element holding the whole report card.
pub const CONTAINER_CLASS: &str = "container";

/// Page background, the renderer tells the card apart from it.
pub const PAGE_BACKGROUND: [u8; 3] = [0xf4, 0xf4, 0xf4];

const STYLE: &str = r#"
    body { font-family: sans-serif; margin: 0; padding: 0; display: flex; justify-content: center; align-items: center; height: 100vh; background-color: #f4f4f4; }
    .container { background-color: #fff; border-radius: 10px; border: 1px solid #ddd; padding: 20px; width: 90%; max-width: 800px; text-align: center; }
    .header { font-size: 1.5em; margin-bottom: 10px; color: #333; }
    .subheader { font-size: 0.8em; color: rgb(94, 94, 94); margin-bottom: 20px; }
    .overview { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-bottom: 20px; }
    .overview div { flex: 1 1 calc(20% - 16px); min-width: 150px; background-color: #f9f9f9; padding: 10px; border: 1px solid #ddd; border-radius: 8px; text-align: center; }
    .highlight { font-size: 1.2em; font-weight: bold; color: #555; }
    .details { margin-top: 20px; text-align: left; }
    .details p { margin: 5px 0; font-size: 0.9em; color: #555; }
"#;

fn overview_item(item: &Item) -> String {
    format!(
        "\n      <div>{}<br><span class=\"highlight\">{}</span></div>",
        encode_text(item.label),
        encode_text(&item.value),
    )
}

fn detail_item(item: &Item) -> String {
    format!(
        "\n      <p><strong>{}：</strong>{}</p>",
        encode_text(item.label),
        encode_text(&item.value),
    )
}

/// Serializes report sections into a standalone HTML page.
pub fn render(sections: &Sections) -> String {
    let overview: String = sections.overview.iter().map(overview_item).collect();
    let details: String = sections.details.iter().map(detail_item).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>{style}</style>
  <title>{title}</title>
</head>
<body>
  <div class="{container}">
    <div class="header">{header} - {icao}</div>
    <div class="subheader">{generated_at}</div>
    <div class="overview">{overview}
    </div>
    <div class="details">{details}
    </div>
  </div>
</body>
</html>
"#,
        style = STYLE,
        title = locale::TITLE,
        container = CONTAINER_CLASS,
        header = locale::HEADER,
        icao = encode_text(&sections.icao),
        generated_at = encode_text(&sections.generated_at),
        overview = overview,
        details = details,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Sections {
        Sections {
            icao: "EGLL".into(),
            generated_at: "本页面由九号生成于 2024年03月25日10时00分05秒，数据源于XFlysim Network".into(),
            overview: vec![Item { label: locale::TEMPERATURE, value: "9°C".into() }],
            details: vec![Item { label: locale::RAW_METAR, value: "METAR EGLL 251020Z <&> RMK".into() }],
        }
    }

    #[test]
    fn renders_every_section() {
        let html = render(&sections());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"container\">"));
        assert!(html.contains("<div class=\"header\">METAR 信息 - EGLL</div>"));
        assert!(html.contains("2024年03月25日10时00分05秒"));
        assert!(html.contains("<div>温度<br><span class=\"highlight\">9°C</span></div>"));
        assert!(html.contains("<p><strong>原始METAR：</strong>"));
    }

    #[test]
    fn escapes_values() {
        let html = render(&sections());

        assert!(html.contains("METAR EGLL 251020Z &lt;&amp;&gt; RMK"));
        assert!(!html.contains("<&>"));
    }

    #[test]
    fn items_keep_their_order() {
        let mut sections = sections();
        sections.overview.push(Item { label: locale::PRESSURE, value: "1016 hPa".into() });

        let html = render(&sections);
        let temperature = html.find("温度<br>").unwrap();
        let pressure = html.find("气压<br>").unwrap();
        assert!(temperature < pressure);
    }

    #[test]
    fn card_has_no_shadow() {
        // the auto capture crops to whatever differs from the page background
        assert!(!STYLE.contains("box-shadow"));
        assert!(render(&sections()).contains("background-color: #f4f4f4"));
    }
}
