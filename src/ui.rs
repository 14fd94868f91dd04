use crate::controller::MSG_COPY_FAILED;
use crate::jokeapi::CATEGORIES;
use crate::models::WidgetView;
use crate::shortcuts::bindings_json;

pub fn render_index(view: &WidgetView) -> String {
    let initial = serde_json::to_string(view).unwrap_or_else(|_| "null".to_string());
    INDEX_HTML
        .replace("{{COUNT}}", &view.count.to_string())
        .replace("{{CATEGORIES}}", &category_options())
        .replace("{{KEYMAP}}", &script_safe(&bindings_json()))
        .replace("{{COPY_FAILED}}", &script_safe(&json_string(MSG_COPY_FAILED)))
        .replace("{{INITIAL}}", &script_safe(&initial))
}

fn category_options() -> String {
    CATEGORIES
        .iter()
        .map(|category| format!(r#"<option value="{category}">{category}</option>"#))
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// JSON is inlined in a `<script>` block, where `</` would end it early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Joke Generator</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --primary: #ff6b4a;
      --danger: #c63b2b;
      --gray: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f5c57;
    }

    #joke-area {
      background: white;
      border-radius: 20px;
      padding: 24px;
      min-height: 140px;
      font-size: 1.2rem;
      line-height: 1.5;
      white-space: pre-line;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #joke-area.loading {
      opacity: 0.5;
    }

    .error-message {
      color: var(--danger);
    }

    .meta {
      display: flex;
      flex-wrap: wrap;
      gap: 18px;
      color: #6b645d;
      font-size: 0.95rem;
    }

    .meta strong {
      color: var(--gray);
    }

    .controls,
    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    select,
    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
    }

    select {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button {
      cursor: pointer;
      background: var(--gray);
      color: white;
    }

    button:disabled {
      opacity: 0.6;
      cursor: progress;
    }

    #joke-button {
      background: var(--primary);
    }

    #fav-button.favorite {
      background: var(--primary);
    }

    #history-panel.hidden {
      display: none;
    }

    #history-list {
      list-style: none;
      padding: 0;
      margin: 12px 0;
      display: grid;
      gap: 8px;
    }

    #history-list li {
      background: white;
      border-radius: 14px;
      padding: 12px 16px;
      cursor: pointer;
    }

    .notification {
      position: fixed;
      bottom: 24px;
      right: 24px;
      padding: 14px 20px;
      border-radius: 14px;
      color: white;
      opacity: 0;
      transition: opacity 200ms ease;
    }

    .notification.show {
      opacity: 1;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Joke Generator</h1>
      <p class="subtitle">Jokes served: <span id="joke-count">{{COUNT}}</span></p>
    </header>

    <section class="controls">
      <select id="category-select" aria-label="Category">
          {{CATEGORIES}}
      </select>
      <button id="joke-button" type="button">Generate Joke</button>
    </section>

    <div id="joke-area">Click the button to get a joke!</div>

    <section class="meta">
      <span>Category: <strong id="category">-</strong></span>
      <span>Type: <strong id="type">-</strong></span>
      <span>Rating: <strong id="rating">-</strong></span>
    </section>

    <section class="actions">
      <button id="copy-button" type="button">Copy</button>
      <button id="tweet-button" type="button">Share</button>
      <button id="fav-button" type="button">Favorite</button>
      <button id="history-button" type="button">History</button>
    </section>

    <section id="history-panel" class="hidden">
      <ul id="history-list"></ul>
      <button id="clear-history" type="button">Clear history</button>
    </section>

    <p class="hint">Space or Enter for a new joke, Ctrl+C to copy.</p>
  </main>

  <div id="notification" class="notification"></div>

  <script>
    const KEYMAP = {{KEYMAP}};
    const COPY_FAILED = {{COPY_FAILED}};
    const INITIAL = {{INITIAL}};

    const jokeArea = document.getElementById('joke-area');
    const jokeButton = document.getElementById('joke-button');
    const categorySelect = document.getElementById('category-select');
    const jokeCount = document.getElementById('joke-count');
    const categoryEl = document.getElementById('category');
    const typeEl = document.getElementById('type');
    const ratingEl = document.getElementById('rating');
    const favButton = document.getElementById('fav-button');
    const historyPanel = document.getElementById('history-panel');
    const historyList = document.getElementById('history-list');
    const notification = document.getElementById('notification');
    const COLORS = { success: 'var(--primary)', error: 'var(--danger)', info: 'var(--gray)' };

    let lastSeq = 0;
    let notificationTimer = null;

    const showNotification = (message, level, durationMs) => {
      notification.textContent = message;
      notification.style.background = COLORS[level] || COLORS.info;
      notification.classList.add('show');
      clearTimeout(notificationTimer);
      notificationTimer = setTimeout(() => notification.classList.remove('show'), durationMs || 3000);
    };

    const renderContent = (content) => {
      if (content.state === 'joke') {
        jokeArea.textContent = content.text;
      } else if (content.state === 'error') {
        jokeArea.innerHTML = '<div class="error-message"><p>Oops! Failed to fetch a joke. Please try again.</p></div>';
      }
    };

    const renderHistory = (items) => {
      historyList.innerHTML = '';
      items.forEach((item) => {
        const li = document.createElement('li');
        const head = document.createElement('strong');
        head.textContent = item.category;
        const small = document.createElement('small');
        small.textContent = `${item.date} • ${item.type}`;
        li.append(head, ` - ${item.preview}`, document.createElement('br'), small);
        li.addEventListener('click', () => send('POST', `/api/history/${item.id}`));
        historyList.appendChild(li);
      });
    };

    const render = (view) => {
      if (!view) {
        return;
      }
      renderContent(view.display.content);
      categoryEl.textContent = view.display.category || '-';
      typeEl.textContent = view.display.kind || '-';
      ratingEl.textContent = view.display.rating || '-';
      jokeCount.textContent = view.count;
      favButton.classList.toggle('favorite', view.favorited);
      renderHistory(view.history);
      const note = view.notification;
      if (note && note.seq !== lastSeq) {
        lastSeq = note.seq;
        showNotification(note.message, note.level, note.duration_ms);
      }
    };

    const send = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      const type = res.headers.get('content-type') || '';
      if (!type.includes('application/json')) {
        throw new Error(await res.text());
      }
      const data = await res.json();
      render(data.view || data);
      return data;
    };

    const generateJoke = async () => {
      jokeArea.classList.add('loading');
      jokeButton.disabled = true;
      jokeButton.textContent = 'Loading...';
      try {
        await send('POST', '/api/joke', { category: categorySelect.value });
      } catch (err) {
        console.error('Error fetching joke:', err);
      } finally {
        jokeArea.classList.remove('loading');
        jokeButton.disabled = false;
        jokeButton.textContent = 'Generate Joke';
      }
    };

    const copyJoke = async () => {
      let data;
      try {
        data = await send('POST', '/api/copy');
      } catch (err) {
        return;
      }
      try {
        await navigator.clipboard.writeText(data.text);
      } catch (err) {
        showNotification(COPY_FAILED, 'error', 3000);
      }
    };

    const shareJoke = async () => {
      const res = await fetch('/api/share');
      if (res.ok) {
        const data = await res.json();
        window.open(data.url, '_blank');
      }
    };

    const toggleFavorite = () => send('POST', '/api/favorite').catch(() => {});

    const clearHistory = () => {
      if (confirm('Are you sure you want to clear all history?')) {
        send('DELETE', '/api/history?confirm=true').catch(() => {});
      }
    };

    const actions = { generate: generateJoke, copy: copyJoke };

    jokeButton.addEventListener('click', generateJoke);
    categorySelect.addEventListener('change', generateJoke);
    document.getElementById('copy-button').addEventListener('click', copyJoke);
    document.getElementById('tweet-button').addEventListener('click', shareJoke);
    favButton.addEventListener('click', toggleFavorite);
    document.getElementById('history-button').addEventListener('click', () => historyPanel.classList.toggle('hidden'));
    document.getElementById('clear-history').addEventListener('click', clearHistory);

    document.addEventListener('keydown', (event) => {
      const binding = KEYMAP.find((b) => b.code === event.code && (event.ctrlKey || !b.ctrl));
      if (binding) {
        event.preventDefault();
        actions[binding.action]();
      }
    });

    render(INITIAL);
    window.addEventListener('load', () => setTimeout(generateJoke, 500));
  </script>
</body>
</html>
"#;
