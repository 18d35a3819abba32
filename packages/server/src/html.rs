//! Embedded dashboard page.
//!
//! Kept as a `&'static str` so the server binary has no static file
//! directory to ship. The page only talks to the JSON API; all filtering
//! happens server-side.

pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Outbreak Map</title>
  <link href="https://unpkg.com/maplibre-gl@4/dist/maplibre-gl.css" rel="stylesheet" />
  <script src="https://unpkg.com/maplibre-gl@4/dist/maplibre-gl.js"></script>
  <script src="https://unpkg.com/deck.gl@9/dist.min.js"></script>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem; }
    .controls { display: flex; flex-wrap: wrap; gap: 1.5rem; align-items: flex-start; margin: 1rem 0; }
    .controls label.caption { display: block; font-weight: 600; margin-bottom: 0.25rem; }
    .controls.labels-hidden label.caption { visibility: hidden; }
    .controls.labels-collapsed label.caption { display: none; }
    #diseases { min-width: 14rem; min-height: 6rem; }
    #map { position: relative; height: 520px; margin: 1rem 0; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border-bottom: 1px solid #ddd; padding: 0.35rem 0.5rem; text-align: left; vertical-align: top; }
    .hidden { display: none; }
    .message { color: #555; }
  </style>
</head>
<body>
  <h2>Disease Outbreaks by District</h2>

  <div class="controls" id="controls">
    <div>
      <label class="caption" for="window">Time period:</label>
      <select id="window"></select>
    </div>
    <div id="disease-controls" class="hidden">
      <label class="caption" for="diseases">Select Disease(s) to Display on the Map</label>
      <select id="diseases" multiple></select>
    </div>
    <div id="select-all-controls" class="hidden">
      <label class="caption">Select All Diseases</label>
      <label><input type="radio" name="all" value="yes" /> Yes</label>
      <label><input type="radio" name="all" value="no" checked /> No</label>
    </div>
  </div>

  <p id="results"></p>
  <p id="message" class="message hidden"></p>
  <div id="map" class="hidden"></div>

  <section id="table-section" class="hidden">
    <h3>Filtered Data for Selected Diseases</h3>
    <p id="table-message" class="message hidden"></p>
    <table id="table" class="hidden">
      <thead>
        <tr><th>districts</th><th>relevant_outcome_count</th><th>caseload_phrases</th></tr>
      </thead>
      <tbody></tbody>
    </table>
  </section>

  <script>
    const el = (id) => document.getElementById(id);
    let deckgl = null;
    let diseasesTouched = false;

    function escapeHtml(value) {
      return String(value)
        .replaceAll("&", "&amp;")
        .replaceAll("<", "&lt;")
        .replaceAll(">", "&gt;")
        .replaceAll('"', "&quot;");
    }

    function show(id, visible) {
      el(id).classList.toggle("hidden", !visible);
    }

    async function loadSelector() {
      const selector = await fetch("/api/time-windows").then((r) => r.json());
      const select = el("window");
      for (const w of selector.windows) {
        const option = document.createElement("option");
        option.value = w.label;
        option.textContent = w.label;
        option.selected = w.label === selector.defaultWindow;
        select.appendChild(option);
      }
      el("controls").classList.add("labels-" + selector.labelVisibility);
      for (const input of document.querySelectorAll("select, input")) {
        input.disabled = selector.disabled;
      }
    }

    function query() {
      const params = new URLSearchParams();
      params.set("window", el("window").value);
      if (diseasesTouched) {
        const chosen = Array.from(el("diseases").selectedOptions).map((o) => o.value);
        params.set("diseases", chosen.join(","));
      }
      const all = document.querySelector("input[name=all]:checked").value === "yes";
      params.set("allDiseases", String(all));
      return params.toString();
    }

    function renderDiseases(available, selected) {
      const select = el("diseases");
      select.innerHTML = "";
      for (const d of available) {
        const option = document.createElement("option");
        option.value = d;
        option.textContent = d;
        option.selected = selected.includes(d);
        select.appendChild(option);
      }
    }

    function renderMap(dashboard) {
      const layer = dashboard.layer;
      const scatter = new deck.ScatterplotLayer({
        id: "outbreaks",
        data: dashboard.rows,
        pickable: true,
        opacity: layer.opacity,
        stroked: layer.stroked,
        filled: layer.filled,
        radiusScale: layer.radiusScale,
        radiusMinPixels: layer.radiusMinPixels,
        radiusMaxPixels: layer.radiusMaxPixels,
        lineWidthMinPixels: layer.lineWidthMinPixels,
        getPosition: (d) => d.coordinates,
        getRadius: (d) => d.radius,
        getFillColor: layer.fillColor,
        getLineColor: layer.lineColor,
      });

      if (deckgl === null) {
        deckgl = new deck.DeckGL({
          container: "map",
          mapStyle: "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json",
          initialViewState: dashboard.viewState,
          controller: true,
          getTooltip: ({ object }) => object && object.caseloadPhrases,
          layers: [scatter],
        });
      } else {
        deckgl.setProps({ layers: [scatter] });
      }
    }

    function renderTable(rows) {
      const body = el("table").querySelector("tbody");
      body.innerHTML = rows
        .map((r) =>
          "<tr><td>" + escapeHtml(r.districts.join(", ")) +
          "</td><td>" + escapeHtml(r.relevantOutcomeCount) +
          "</td><td>" + escapeHtml(r.caseloadPhrases) + "</td></tr>")
        .join("");
    }

    async function refresh() {
      const response = await fetch("/api/dashboard?" + query());
      const dashboard = await response.json();
      if (!response.ok) {
        el("results").textContent = dashboard.error;
        return;
      }

      el("results").textContent = dashboard.resultsLine;

      const hasDiseases = dashboard.availableDiseases.length > 0;
      show("disease-controls", hasDiseases);
      show("select-all-controls", hasDiseases);
      show("table-section", hasDiseases);
      if (!hasDiseases) {
        el("message").textContent = dashboard.message;
        show("message", true);
        show("map", false);
        return;
      }
      show("message", false);
      renderDiseases(dashboard.availableDiseases, dashboard.selectedDiseases);

      const hasRows = dashboard.rows.length > 0;
      show("map", hasRows);
      show("table", hasRows);
      show("table-message", !hasRows);
      if (hasRows) {
        renderMap(dashboard);
        renderTable(dashboard.rows);
      } else {
        el("table-message").textContent = dashboard.message;
      }
    }

    el("window").addEventListener("change", refresh);
    el("diseases").addEventListener("change", () => {
      diseasesTouched = true;
      refresh();
    });
    for (const radio of document.querySelectorAll("input[name=all]")) {
      radio.addEventListener("change", refresh);
    }

    loadSelector().then(refresh);
  </script>
</body>
</html>
"#;
