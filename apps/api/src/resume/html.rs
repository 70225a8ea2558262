//! HTML pages for the resume web app: the upload form and the results page.
//! The analysis text is rendered verbatim inside a pre-wrap block.

/// GET / — the PDF upload form.
pub const UPLOAD_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Resume Analyzer</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
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
    <h1>Resume Analyzer</h1>
    <p>Upload a resume in PDF format to analyze it with AI.</p>

    <form action="/analyze/" enctype="multipart/form-data" method="post">
        <div class="form-group">
            <label for="resume">Resume PDF:</label>
            <input type="file" name="resume" accept=".pdf" required>
        </div>
        <button type="submit">Analyze Resume</button>
    </form>
</body>
</html>
"#;

/// POST /analyze/ results page. Also used for extraction failures, with the
/// error message as the result text.
pub fn results_page(analysis: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Resume Analysis Results</title>
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
        .result {{
            white-space: pre-wrap;
            background: #f9f9f9;
            padding: 20px;
            border-radius: 4px;
            border-left: 4px solid #0077ff;
            margin-top: 20px;
            font-family: monospace;
            line-height: 1.5;
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
    <h1>Resume Analysis Results</h1>
    <div class="result">{analysis}</div>
    <a href="/" style="display: block; margin-top: 20px;">Analyze Another Resume</a>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_page_embeds_analysis_verbatim() {
        let page = results_page("1. NAME: Jane Doe\n2. EMAIL: jane@example.com");
        assert!(page.contains("1. NAME: Jane Doe\n2. EMAIL: jane@example.com"));
    }

    #[test]
    fn results_page_can_carry_an_error_message() {
        let page = results_page("Error: The PDF appears to be scanned or has no extractable text.");
        assert!(page.contains("no extractable text"));
    }
}
