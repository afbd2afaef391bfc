//! HTML template constants for the `HtmlFormatter`.
//!
//! Separates CSS styles and JavaScript code from the core formatting logic.

/// HTML document header including all CSS styles.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>style-guard Report</title>
    <style>
        :root {
            --color-clean: #22c55e;
            --color-warning: #eab308;
            --color-error: #ef4444;
            --color-score: #6366f1;
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-ins: #bbf7d0;
            --color-del: #fecaca;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; color: var(--color-text); }
        .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
        .summary-card { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); text-align: center; }
        .summary-card .value { font-size: 2rem; font-weight: 700; display: block; }
        .summary-card .label { font-size: 0.875rem; color: var(--color-text-muted); margin-top: 0.25rem; }
        .summary-card.score .value { color: var(--color-score); }
        .summary-card.clean .value { color: var(--color-clean); }
        .summary-card.warning .value { color: var(--color-warning); }
        .summary-card.error .value { color: var(--color-error); }
        .filter-controls { display: flex; gap: 0.5rem; margin-bottom: 1rem; flex-wrap: wrap; }
        .filter-btn { padding: 0.5rem 1rem; border: 1px solid var(--color-border); background: var(--color-card); border-radius: 0.375rem; cursor: pointer; font-size: 0.875rem; transition: all 0.15s; }
        .filter-btn:hover { background: var(--color-bg); }
        .filter-btn.active { background: var(--color-text); color: var(--color-card); border-color: var(--color-text); }
        .file { background: var(--color-card); border-radius: 0.5rem; border: 1px solid var(--color-border); margin-bottom: 1rem; overflow: hidden; }
        .file.hidden { display: none; }
        .file-header { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1rem; background: var(--color-bg); border-bottom: 1px solid var(--color-border); }
        .file-path { font-family: 'SF Mono', SFMono-Regular, Consolas, 'Liberation Mono', Menlo, monospace; font-size: 0.8125rem; word-break: break-all; }
        .status { display: inline-flex; align-items: center; gap: 0.375rem; padding: 0.25rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; white-space: nowrap; }
        .status.clean { background: #dcfce7; color: #166534; }
        .status.warning { background: #fef9c3; color: #854d0e; }
        .status.error { background: #fee2e2; color: #991b1b; }
        .file-body { padding: 0.75rem 1rem; font-size: 0.875rem; }
        .file-body pre { font-family: 'SF Mono', SFMono-Regular, Consolas, 'Liberation Mono', Menlo, monospace; font-size: 0.8125rem; overflow-x: auto; }
        .file-body ins { background: var(--color-ins); text-decoration: none; }
        .file-body del { background: var(--color-del); text-decoration: none; }
        .note { font-size: 0.75rem; color: var(--color-text-muted); margin-top: 0.5rem; }
        .message { color: var(--color-error); }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        .no-results { padding: 2rem; text-align: center; color: var(--color-text-muted); }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .summary-card, .file { border: 1px solid #333; }
            .summary-card .value { color: inherit !important; }
            .filter-controls { display: none; }
            .status { background: transparent !important; border: 1px solid currentColor; }
            .file-body ins { text-decoration: underline; }
            .file-body del { text-decoration: line-through; }
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>style-guard Report</h1>
"#;

/// HTML document footer including JavaScript for the status filter.
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>style-guard</strong>
        </div>
    </div>
    <script>
        (function() {
            const filterBtns = document.querySelectorAll('.filter-btn');
            const files = document.querySelectorAll('.file');
            filterBtns.forEach(btn => {
                btn.addEventListener('click', () => {
                    filterBtns.forEach(b => b.classList.remove('active'));
                    btn.classList.add('active');
                    const filter = btn.dataset.filter;
                    files.forEach(file => {
                        const status = file.dataset.status;
                        if (filter === 'all') {
                            file.classList.remove('hidden');
                        } else {
                            file.classList.toggle('hidden', status === 'clean');
                        }
                    });
                });
            });
        })();
    </script>
</body>
</html>
"#;
