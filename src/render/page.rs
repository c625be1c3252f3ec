use super::view::ViewMode;
use crate::{Result, app::Session};
use askama::Template;

/// Full HTML document for the current session.
///
/// The generated output is trusted: preview mode injects it unescaped,
/// code mode shows the same string escaped.
pub fn render_page(session: &Session) -> Result<String> {
    let form = session.form();
    let inputs = form.inputs();
    let view = session.view();

    let template = PageTemplate {
        keyword: &inputs.keyword,
        source_link: &inputs.source_link,
        image_link: &inputs.image_link,
        can_submit: form.can_submit(),
        is_generating: form.is_generating(),
        error: form.error(),
        output: form.output(),
        has_output: !form.output().is_empty(),
        code_mode: view.mode() == ViewMode::Code,
        copied: view.is_copied(),
        copied_remaining_ms: view
            .copied_remaining()
            .map(|left| left.as_millis() as u64)
            .unwrap_or_default(),
    };

    Ok(template.render()?)
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>SEO Blog Architect</title>
    <script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>
  </head>
  <body class="min-h-screen bg-slate-50 text-slate-900 pb-20">
    <header class="bg-white border-b border-slate-200 py-6">
      <div class="max-w-6xl mx-auto px-4">
        <h1 class="text-xl font-bold">SEO Blog Architect</h1>
        <p class="text-xs text-slate-500 font-medium uppercase tracking-wider">Market Research AI Edition</p>
      </div>
    </header>

    <main class="max-w-6xl mx-auto px-4 pt-12">
      <section class="bg-white rounded-xl shadow-sm border border-slate-200 p-6">
        <h2 class="text-xl font-semibold mb-6">Generation Parameters</h2>
        <form id="generate-form" method="post" action="/generate" data-generating="{{ is_generating }}">
          <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <label class="block text-sm font-medium text-slate-700">Target Keyword
              <input type="text" name="keyword" value="{{ keyword }}" placeholder="e.g., Cloud Security Solutions" required class="w-full px-4 py-2 border rounded-lg" />
            </label>
            <label class="block text-sm font-medium text-slate-700">Source Link
              <input type="url" name="source_link" value="{{ source_link }}" placeholder="https://market-report.com/sample" required class="w-full px-4 py-2 border rounded-lg" />
            </label>
            <label class="block text-sm font-medium text-slate-700">Image Link
              <input type="url" name="image_link" value="{{ image_link }}" placeholder="https://picsum.photos/800/600" required class="w-full px-4 py-2 border rounded-lg" />
            </label>
          </div>
          <button id="generate-button" type="submit" class="mt-8 w-full py-4 rounded-lg font-bold text-white bg-blue-600 disabled:bg-slate-300"{% if !can_submit %} disabled{% endif %}>
            {% if is_generating %}Architecting Content...{% else %}Generate Professional Blog{% endif %}
          </button>
        </form>
      </section>

      {% if let Some(error) = error %}
      <div id="error-banner" role="alert" class="mt-8 p-4 bg-red-50 border border-red-200 rounded-lg text-red-700">
        <p class="font-medium">{{ error }}</p>
      </div>
      {% endif %}

      <div id="result-area">
        {% if is_generating %}
        <div id="progress" class="mt-12 text-center py-12">
          <h3 class="text-xl font-semibold">Compiling Market Insights...</h3>
          <p class="text-slate-500 mt-2">This may take up to 60 seconds for deep research &amp; 1500+ words.</p>
        </div>
        {% endif %}

        {% if has_output %}
        <section id="output" class="mt-8 bg-white rounded-xl shadow-sm border border-slate-200">
          <div class="flex items-center justify-between px-6 py-4 bg-slate-50 border-b border-slate-200">
            <div class="flex gap-4">
              <form method="post" action="/view">
                <input type="hidden" name="mode" value="preview" />
                <button type="submit" class="px-4 py-2 text-sm font-semibold rounded-md"{% if !code_mode %} aria-current="page"{% endif %}>Live Preview</button>
              </form>
              <form method="post" action="/view">
                <input type="hidden" name="mode" value="code" />
                <button type="submit" class="px-4 py-2 text-sm font-semibold rounded-md"{% if code_mode %} aria-current="page"{% endif %}>HTML Code</button>
              </form>
            </div>
            <button id="copy-button" type="button" class="px-4 py-2 text-sm font-medium border rounded-lg">{% if copied %}Copied!{% else %}Copy HTML{% endif %}</button>
          </div>
          <textarea id="raw-output" hidden>
{{ output }}</textarea>
          <div class="p-6 max-h-[800px] overflow-y-auto">
            {% if code_mode %}
            <pre class="p-4 bg-slate-900 text-slate-100 rounded-lg text-sm overflow-x-auto"><code id="output-code">{{ output }}</code></pre>
            {% else %}
            <div id="output-preview" class="prose max-w-none">{{ output|safe }}</div>
            {% endif %}
          </div>
        </section>
        {% endif %}
      </div>
    </main>

    <script>
      function reloadToResult() {
        history.replaceState(null, '', '/#result-area');
        location.reload();
      }
    </script>
    {% if has_output %}
    <script>
      (function () {
        var button = document.getElementById('copy-button');
        var raw = document.getElementById('raw-output');
        var revert = function (ms) {
          setTimeout(function () { button.textContent = 'Copy HTML'; }, ms);
        };
        {% if copied %}revert({{ copied_remaining_ms }});{% endif %}
        button.addEventListener('click', function () {
          navigator.clipboard.writeText(raw.value)
            .then(function () { return fetch('/api/copy', { method: 'POST' }); })
            .then(function (res) {
              if (!res.ok) throw new Error('copy was not recorded');
              return res.json();
            })
            .then(function (ack) {
              if (!ack.copied) return;
              button.textContent = 'Copied!';
              revert(ack.ack_ms);
            })
            .catch(function () { button.textContent = 'Copy failed'; });
        });
      })();
    </script>
    {% endif %}
    {% if is_generating %}
    <script>
      (function () {
        var form = document.getElementById('generate-form');
        var poll = function () {
          fetch('/api/state')
            .then(function (res) { return res.json(); })
            .then(function (state) {
              if (state.is_generating) return setTimeout(poll, 2000);
              fetch('/api/fields', { method: 'POST', body: new URLSearchParams(new FormData(form)) })
                .finally(reloadToResult);
            })
            .catch(function () { setTimeout(poll, 2000); });
        };
        setTimeout(poll, 2000);
      })();
    </script>
    {% endif %}
    <script>
      (function () {
        var form = document.getElementById('generate-form');
        var button = document.getElementById('generate-button');
        if (!form || !button || form.dataset.generating === 'true') return;
        var fields = Array.prototype.slice.call(form.querySelectorAll('input'));
        var sync = function () {
          button.disabled = fields.some(function (field) { return field.value === ''; });
        };
        fields.forEach(function (field) { field.addEventListener('input', sync); });
        sync();
      })();
    </script>
  </body>
</html>"#,
    ext = "html"
)]
struct PageTemplate<'a> {
    keyword: &'a str,
    source_link: &'a str,
    image_link: &'a str,
    can_submit: bool,
    is_generating: bool,
    error: Option<&'a str>,
    output: &'a str,
    has_output: bool,
    code_mode: bool,
    copied: bool,
    copied_remaining_ms: u64,
}
