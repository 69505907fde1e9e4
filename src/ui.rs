pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>RoundCounter</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --text-muted: #8b857d;
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
      display: flex;
    }

    .sidebar {
      width: 280px;
      min-height: 100vh;
      background: var(--card);
      backdrop-filter: blur(12px);
      border-right: 1px solid rgba(47, 72, 88, 0.08);
      display: flex;
      flex-direction: column;
      flex-shrink: 0;
    }

    .sidebar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 20px 16px 12px;
    }

    .sidebar-header h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.2rem;
      margin: 0;
    }

    .add-row {
      display: flex;
      gap: 8px;
      padding: 0 16px 16px;
    }

    .add-row input {
      flex: 1;
      min-width: 0;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 12px;
      padding: 10px 12px;
      font: inherit;
      background: white;
    }

    .add-row button {
      border: none;
      border-radius: 12px;
      padding: 10px 14px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    #activityList {
      list-style: none;
      margin: 0;
      padding: 0 8px 16px;
      overflow-y: auto;
      flex: 1;
    }

    .activity-item {
      display: flex;
      align-items: center;
      gap: 8px;
      padding: 12px;
      border-radius: 12px;
      cursor: pointer;
    }

    .activity-item:hover {
      background: rgba(47, 72, 88, 0.06);
    }

    .activity-item.active {
      background: var(--accent-2);
      color: white;
    }

    .activity-item.active .activity-meta {
      color: rgba(255, 255, 255, 0.75);
    }

    .activity-name {
      flex: 1;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
      font-weight: 500;
    }

    .activity-meta {
      font-size: 0.8rem;
      color: var(--text-muted);
      white-space: nowrap;
    }

    .delete-btn,
    .lap-delete {
      border: none;
      background: transparent;
      cursor: pointer;
      font-size: 0.95rem;
      opacity: 0.55;
      padding: 2px 4px;
    }

    .delete-btn:hover,
    .lap-delete:hover {
      opacity: 1;
    }

    .main {
      flex: 1;
      display: flex;
      flex-direction: column;
      min-width: 0;
    }

    .topbar {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 18px 24px;
    }

    #menuBtn {
      display: none;
      border: none;
      background: transparent;
      font-size: 1.3rem;
      cursor: pointer;
    }

    #topbarTitle {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.5rem;
      margin: 0;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .view {
      flex: 1;
      display: grid;
      place-items: center;
      padding: 24px;
    }

    .hidden {
      display: none !important;
    }

    .card {
      width: min(560px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      text-align: center;
    }

    .card h2 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    #tapArea {
      border: none;
      border-radius: 50%;
      width: 220px;
      height: 220px;
      margin: 0 auto;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      cursor: pointer;
      display: grid;
      place-items: center;
      gap: 4px;
      transition: transform 120ms ease;
      font: inherit;
    }

    #tapArea.pressed,
    #tapArea:active {
      transform: scale(0.96);
    }

    #countDisplay {
      font-size: 4rem;
      font-weight: 600;
      line-height: 1;
    }

    .tap-hint {
      font-size: 0.85rem;
      opacity: 0.85;
    }

    #lastLap {
      min-height: 1.2em;
      color: var(--text-muted);
      font-size: 0.9rem;
    }

    .card-actions {
      display: flex;
      justify-content: center;
      gap: 12px;
    }

    .card-actions button {
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      background: var(--accent-2);
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    .stat-badge {
      display: inline-block;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
    }

    #lapList {
      list-style: none;
      margin: 0;
      padding: 0;
      max-height: 45vh;
      overflow-y: auto;
      text-align: left;
    }

    .lap-item {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 10px 6px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .lap-num {
      width: 3em;
      font-weight: 600;
      color: var(--accent-2);
    }

    .lap-time {
      flex: 1;
    }

    .lap-date {
      color: var(--text-muted);
      font-size: 0.85rem;
    }

    #overlay {
      position: fixed;
      inset: 0;
      background: rgba(43, 42, 40, 0.4);
      z-index: 5;
    }

    @media (max-width: 720px) {
      .sidebar {
        position: fixed;
        left: 0;
        top: 0;
        bottom: 0;
        z-index: 10;
        transform: translateX(-100%);
        transition: transform 200ms ease;
      }

      .sidebar.open {
        transform: translateX(0);
      }

      #menuBtn {
        display: block;
      }
    }
  </style>
</head>
<body>
  <aside class="sidebar" id="sidebar">
    <div class="sidebar-header">
      <h2>Activities</h2>
      <button class="delete-btn" id="closeSidebar" aria-label="Close sidebar">✕</button>
    </div>
    <div class="add-row">
      <input id="activityInput" type="text" placeholder="New activity..." maxlength="60" />
      <button id="addActivityBtn" type="button">Add</button>
    </div>
    <ul id="activityList" role="list"></ul>
  </aside>

  <div id="overlay" class="hidden"></div>

  <div class="main">
    <div class="topbar">
      <button id="menuBtn" aria-label="Open sidebar">☰</button>
      <h1 id="topbarTitle">RoundCounter</h1>
    </div>

    <section class="view" id="emptyState">
      <div class="card">
        <h2>No activity selected</h2>
        <p class="subtitle">Pick an activity from the sidebar, or create one to start counting laps.</p>
        <div class="card-actions">
          <button id="showSidebarBtn" type="button">Show activities</button>
        </div>
      </div>
    </section>

    <section class="view hidden" id="counterView">
      <div class="card">
        <h2 id="activityTitle"></h2>
        <button id="tapArea" type="button" aria-label="Record a lap">
          <span id="countDisplay">0</span>
          <span class="tap-hint">Tap to record a lap</span>
        </button>
        <div id="lastLap"></div>
        <div class="card-actions">
          <button id="viewHistoryBtn" type="button">View history</button>
        </div>
      </div>
    </section>

    <section class="view hidden" id="historyView">
      <div class="card">
        <h2 id="historyTitle"></h2>
        <div id="historyStats"></div>
        <ul id="lapList" role="list"></ul>
        <p class="subtitle hidden" id="noLaps">No laps recorded yet.</p>
        <div class="card-actions">
          <button id="backBtn" type="button">Back to counter</button>
        </div>
      </div>
    </section>
  </div>

  <script>
    // Single source of truth for the page. `view` is a three-state machine
    // (empty | counter | history); `current` carries the open activity and
    // its last fetched laps. Every action mutates state, then render()
    // redraws from it.
    const state = {
      activities: [],
      current: null,
      view: 'empty',
    };

    const $ = (id) => document.getElementById(id);

    const emptyState = $('emptyState');
    const counterView = $('counterView');
    const historyView = $('historyView');
    const activityList = $('activityList');
    const activityInput = $('activityInput');
    const countDisplay = $('countDisplay');
    const lastLap = $('lastLap');
    const activityTitle = $('activityTitle');
    const historyTitle = $('historyTitle');
    const historyStats = $('historyStats');
    const lapList = $('lapList');
    const noLaps = $('noLaps');
    const topbarTitle = $('topbarTitle');
    const sidebar = $('sidebar');
    const overlay = $('overlay');

    async function api(method, path, body) {
      const res = await fetch(path, {
        method,
        headers: body ? { 'Content-Type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined,
      });
      const data = await res.json();
      if (!res.ok) throw new Error(data.error || 'Request failed');
      return data;
    }

    function escHtml(str) {
      return str
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;');
    }

    // Timestamps arrive without a timezone marker; they are UTC.
    function asDate(stamp) {
      return new Date(stamp.replace(' ', 'T') + 'Z');
    }

    function formatDate(stamp) {
      return asDate(stamp).toLocaleDateString(undefined, {
        month: 'short', day: 'numeric', year: 'numeric',
      });
    }

    function formatTime(stamp) {
      return asDate(stamp).toLocaleTimeString(undefined, {
        hour: '2-digit', minute: '2-digit', second: '2-digit',
      });
    }

    /* ---------- rendering ---------- */

    function render() {
      emptyState.classList.toggle('hidden', state.view !== 'empty');
      counterView.classList.toggle('hidden', state.view !== 'counter');
      historyView.classList.toggle('hidden', state.view !== 'history');
      topbarTitle.textContent = state.current ? state.current.activity.name : 'RoundCounter';

      renderSidebar();
      if (state.view === 'counter') renderCounter();
      if (state.view === 'history') renderHistory();
    }

    function renderSidebar() {
      activityList.innerHTML = '';
      if (state.activities.length === 0) {
        activityList.innerHTML =
          '<li style="padding:12px 16px;color:var(--text-muted);font-size:0.85rem;">No activities yet.</li>';
        return;
      }
      for (const a of state.activities) {
        const li = document.createElement('li');
        const active = state.current && state.current.activity.id === a.id;
        li.className = 'activity-item' + (active ? ' active' : '');
        li.innerHTML = `
          <span class="activity-name" title="${escHtml(a.name)}">${escHtml(a.name)}</span>
          <span class="activity-meta">${a.lap_count} lap${a.lap_count !== 1 ? 's' : ''}</span>
          <button class="delete-btn" title="Delete activity" aria-label="Delete ${escHtml(a.name)}">🗑</button>
        `;
        li.addEventListener('click', (e) => {
          if (e.target.closest('.delete-btn')) return;
          selectActivity(a.id);
          closeSidebarMobile();
        });
        li.querySelector('.delete-btn').addEventListener('click', (e) => {
          e.stopPropagation();
          deleteActivity(a.id);
        });
        activityList.appendChild(li);
      }
    }

    function renderCounter() {
      const { activity, laps } = state.current;
      activityTitle.textContent = activity.name;
      countDisplay.textContent = laps.length;
      if (laps.length > 0) {
        const last = laps[0]; // newest first
        lastLap.textContent =
          `Last lap: ${formatTime(last.recorded_at)}, ${formatDate(last.recorded_at)}`;
      } else {
        lastLap.textContent = '';
      }
    }

    function renderHistory() {
      const { activity, laps } = state.current;
      historyTitle.textContent = activity.name;
      historyStats.innerHTML =
        `<span class="stat-badge">Total laps: <strong>${laps.length}</strong></span>`;

      lapList.innerHTML = '';
      noLaps.classList.toggle('hidden', laps.length !== 0);
      laps.forEach((lap, i) => {
        const li = document.createElement('li');
        li.className = 'lap-item';
        li.innerHTML = `
          <span class="lap-num">#${laps.length - i}</span>
          <span class="lap-time">${formatTime(lap.recorded_at)}</span>
          <span class="lap-date">${formatDate(lap.recorded_at)}</span>
          <button class="lap-delete" title="Delete lap" aria-label="Delete lap ${laps.length - i}">✕</button>
        `;
        li.querySelector('.lap-delete').addEventListener('click', () => deleteLap(lap.id));
        lapList.appendChild(li);
      });
    }

    function setSidebarCount(activityId, count) {
      const entry = state.activities.find((a) => a.id === activityId);
      if (entry) entry.lap_count = count;
    }

    /* ---------- actions ---------- */

    // Always refetches the lap list; the cached lap_count can be stale.
    async function selectActivity(id) {
      const entry = state.activities.find((a) => a.id === id);
      if (!entry) return;
      state.current = { activity: entry, laps: [] };
      state.view = 'counter';
      render();

      try {
        const data = await api('GET', `/api/activities/${id}/laps`);
        // the user may have moved on while the request was in flight
        if (!state.current || state.current.activity.id !== id) return;
        state.current.laps = data.laps;
        setSidebarCount(id, data.laps.length);
        render();
      } catch (err) {
        console.error(err);
      }
    }

    async function addActivity() {
      const name = activityInput.value.trim();
      if (!name) {
        activityInput.focus();
        return;
      }
      try {
        const activity = await api('POST', '/api/activities', { name });
        const entry = { ...activity, lap_count: 0 };
        state.activities.unshift(entry);
        state.current = { activity: entry, laps: [] };
        state.view = 'counter';
        activityInput.value = '';
        render();
        closeSidebarMobile();
      } catch (err) {
        alert(err.message);
      }
    }

    async function deleteActivity(id) {
      if (!confirm('Delete this activity and all its laps?')) return;
      try {
        await api('DELETE', `/api/activities/${id}`);
        state.activities = state.activities.filter((a) => a.id !== id);
        if (state.current && state.current.activity.id === id) {
          state.current = null;
          state.view = 'empty';
        }
        render();
      } catch (err) {
        alert(err.message);
      }
    }

    async function recordLap() {
      if (!state.current) return;
      const tapArea = $('tapArea');
      tapArea.classList.add('pressed');
      setTimeout(() => tapArea.classList.remove('pressed'), 120);

      const id = state.current.activity.id;
      try {
        const lap = await api('POST', `/api/activities/${id}/laps`);
        if (!state.current || state.current.activity.id !== id) return;
        state.current.laps.unshift(lap);
        setSidebarCount(id, state.current.laps.length);
        render();
      } catch (err) {
        alert(err.message);
      }
    }

    // Lap deletion re-syncs from the server instead of splicing locally.
    async function deleteLap(lapId) {
      if (!state.current) return;
      const id = state.current.activity.id;
      try {
        await api('DELETE', `/api/activities/${id}/laps/${lapId}`);
        const data = await api('GET', `/api/activities/${id}/laps`);
        if (!state.current || state.current.activity.id !== id) return;
        state.current.laps = data.laps;
        setSidebarCount(id, data.laps.length);
        render();
      } catch (err) {
        alert(err.message);
      }
    }

    function openHistory() {
      if (!state.current) return;
      state.view = 'history';
      render();
    }

    function backToCounter() {
      if (!state.current) return;
      state.view = 'counter';
      render();
    }

    /* ---------- mobile sidebar ---------- */

    function openSidebarMobile() {
      sidebar.classList.add('open');
      overlay.classList.remove('hidden');
    }

    function closeSidebarMobile() {
      sidebar.classList.remove('open');
      overlay.classList.add('hidden');
    }

    /* ---------- wiring ---------- */

    $('addActivityBtn').addEventListener('click', addActivity);
    activityInput.addEventListener('keydown', (e) => {
      if (e.key === 'Enter') addActivity();
    });

    $('tapArea').addEventListener('click', recordLap);
    $('tapArea').addEventListener('keydown', (e) => {
      if (e.key === 'Enter' || e.key === ' ') {
        e.preventDefault();
        recordLap();
      }
    });

    $('viewHistoryBtn').addEventListener('click', openHistory);
    $('backBtn').addEventListener('click', backToCounter);

    $('menuBtn').addEventListener('click', openSidebarMobile);
    $('closeSidebar').addEventListener('click', closeSidebarMobile);
    $('showSidebarBtn').addEventListener('click', openSidebarMobile);
    overlay.addEventListener('click', closeSidebarMobile);

    async function init() {
      try {
        state.activities = await api('GET', '/api/activities');
        if (state.activities.length > 0) {
          render();
          selectActivity(state.activities[0].id);
        } else {
          state.view = 'empty';
          render();
        }
      } catch (err) {
        console.error('Failed to load activities', err);
        state.view = 'empty';
        render();
      }
    }

    init();
  </script>
</body>
</html>
"#;
