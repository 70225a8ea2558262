//! HTML pages for the poem web app. Plain string templating, carried over
//! from the original pages; values are interpolated verbatim.

use crate::poems::store::PoemRecord;

/// GET / — the name form and a link to the history view.
pub const HOME_PAGE: &str = r#"<!doctype html>
<html>
<head>
    <title>AI Poem Generator</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }
        h1 {
            color: #0077ff;
            font-size: 28px;
            margin-bottom: 20px;
        }
        .form-group {
            margin-bottom: 15px;
        }
        label {
            display: block;
            margin-bottom: 5px;
            font-weight: bold;
        }
        input {
            width: 100%;
            padding: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
        }
        button {
            background: #0077ff;
            color: white;
            border: none;
            padding: 10px 20px;
            font-size: 16px;
            border-radius: 4px;
            cursor: pointer;
        }
        button:hover {
            background: #0055cc;
        }
    </style>
</head>
<body>
    <h1>AI Poem Generator</h1>
    <form method="post">
        <div class="form-group">
            <label for="name">Your Name:</label>
            <input id="name" name="name" required>
        </div>
        <button type="submit">Generate Poem</button>
    </form>
    <p><a href="/history">View Poem History</a></p>
</body>
</html>
"#;

/// POST / success page: the freshly generated poem.
pub fn poem_page(name: &str, poem: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
    <title>Your Personalized Poem</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }}
        h1 {{
            color: #0077ff;
            font-size: 28px;
            margin-bottom: 20px;
        }}
        .poem {{
            white-space: pre-wrap;
            background: #f9f9f9;
            padding: 20px;
            border-radius: 4px;
            border-left: 4px solid #0077ff;
            margin-top: 20px;
            font-family: Georgia, serif;
            line-height: 1.5;
            color: #5500aa;
        }}
        button {{
            background: #0077ff;
            color: white;
            border: none;
            padding: 10px 20px;
            font-size: 16px;
            border-radius: 4px;
            cursor: pointer;
            margin-top: 20px;
        }}
        button:hover {{
            background: #0055cc;
        }}
    </style>
</head>
<body>
    <h1>A Poem for {name}</h1>
    <div class="poem">{poem}</div>
    <form method="get" action="/">
        <button type="submit">Create Another Poem</button>
    </form>
    <p><a href="/history">View All Poems</a></p>
</body>
</html>
"#
    )
}

/// GET /history — every stored poem, newest first.
pub fn history_page(records: &[PoemRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        let created_at = record.created_at.format("%Y-%m-%d %H:%M:%S");
        rows.push_str(&format!(
            r#"        <tr>
            <td>{}</td>
            <td style="white-space: pre-wrap">{}</td>
            <td>{}</td>
        </tr>
"#,
            record.name, record.poem, created_at
        ));
    }

    format!(
        r#"<!doctype html>
<html>
<head>
    <title>Poem History</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }}
        h1 {{
            color: #0077ff;
            font-size: 28px;
            margin-bottom: 20px;
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }}
        th, td {{
            padding: 10px;
            border: 1px solid #ddd;
            text-align: left;
            vertical-align: top;
        }}
        th {{
            background-color: #f2f2f2;
            font-weight: bold;
        }}
        a {{
            color: #0077ff;
            text-decoration: none;
        }}
        a:hover {{
            text-decoration: underline;
        }}
    </style>
</head>
<body>
    <h1>Poem History</h1>
    <p><a href="/">&larr; Back to Generator</a></p>

    <table>
        <tr>
            <th>Name</th>
            <th>Poem</th>
            <th>Created At</th>
        </tr>
{rows}    </table>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn record(name: &str, poem: &str) -> PoemRecord {
        PoemRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            poem: poem.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn poem_page_shows_name_and_poem() {
        let page = poem_page("Ada", "Roses are red\nCode compiles clean");
        assert!(page.contains("A Poem for Ada"));
        assert!(page.contains("Roses are red\nCode compiles clean"));
    }

    #[test]
    fn history_page_renders_one_row_per_record() {
        let records = vec![record("Ada", "poem one"), record("Bob", "poem two")];
        let page = history_page(&records);
        assert!(page.contains("poem one"));
        assert!(page.contains("poem two"));
        assert_eq!(page.matches("<tr>").count(), 3); // header + 2 records
        assert!(page.contains("2026-08-30 12:00:00"));
    }

    #[test]
    fn history_page_with_no_records_is_just_the_header() {
        let page = history_page(&[]);
        assert_eq!(page.matches("<tr>").count(), 1);
    }
}
