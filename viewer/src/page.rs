//! The static browser page: a period dropdown over a Plotly 3D graph.
//!
//! The page is self-contained; it pulls the period list from `/periods`,
//! fetches the ready-made figure from `/figure/<p>` on every selection and
//! hands it straight to Plotly.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Product-PRODY Space Network</title>
  <script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
  <style>
    body { font-family: sans-serif; margin: 1rem; }
    #period-dropdown { margin-bottom: 0.5rem; min-width: 10rem; }
    #network-graph { width: 100%; height: 85vh; }
  </style>
</head>
<body>
  <h1>Product-PRODY Space Network</h1>
  <select id="period-dropdown"></select>
  <div id="network-graph"></div>
  <script>
    const dropdown = document.getElementById('period-dropdown');

    async function draw(period) {
      const resp = await fetch(`/figure/${period}`);
      if (!resp.ok) {
        console.error('figure fetch failed', resp.status, await resp.text());
        return;
      }
      const fig = await resp.json();
      Plotly.react('network-graph', fig.data, fig.layout);
    }

    async function init() {
      const periods = await (await fetch('/periods')).json();
      for (const p of periods) {
        const opt = document.createElement('option');
        opt.value = p;
        opt.textContent = `Period ${p}`;
        dropdown.appendChild(opt);
      }
      dropdown.addEventListener('change', () => draw(dropdown.value));
      if (periods.length > 0) {
        dropdown.value = periods[0];
        draw(periods[0]);
      }
    }

    init();
  </script>
</body>
</html>
"##;
