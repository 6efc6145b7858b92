//! Embedded HTML templates.
//!
//! Kept as `&'static str` so the binary writes pages without filesystem
//! lookups. `{{TITLE}}`, `{{VIEW_JSON}}` and `{{MESSAGE}}` are substituted
//! by the page module.

pub const MAP_PAGE_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #map { position: absolute; inset: 0; }
    .legend {
      padding: 6px 10px;
      background: rgba(255, 255, 255, 0.9);
      border-radius: 5px;
      box-shadow: 0 0 15px rgba(0, 0, 0, 0.2);
      font: 14px/18px Arial, Helvetica, sans-serif;
    }
    .legend h3 { margin: 0 0 6px; font-size: 14px; }
    .legend li { list-style: none; padding: 2px 8px; margin: 0; color: #111; }
  </style>
</head>

<body>
  <div id="map"></div>

  <script id="view-data" type="application/json">{{VIEW_JSON}}</script>
  <script>
    const VIEW = JSON.parse(document.getElementById("view-data").textContent);

    const baseLayers = {};
    for (const base of VIEW.baseLayers) {
      baseLayers[base.name] = L.tileLayer(base.urlTemplate, {
        attribution: base.attribution,
        minZoom: base.minZoom,
        maxZoom: base.maxZoom,
        id: base.id,
        accessToken: base.accessToken
      });
    }

    function toLayer(layer, groupStyle) {
      const style = Object.assign({}, groupStyle || {}, layer.style);
      let built;
      if (layer.kind === "circleMarker") {
        built = L.circleMarker([layer.center.lat, layer.center.lng],
          Object.assign({ radius: Math.max(layer.radius, 0) }, style));
      } else {
        built = L.polyline(layer.paths.map(path => path.map(p => [p.lat, p.lng])), style);
      }
      if (layer.popup) {
        built.bindPopup(layer.popup.html);
      }
      return built;
    }

    const overlays = {};
    const initial = [baseLayers[VIEW.activeBase]];
    for (const overlay of VIEW.overlays) {
      const group = L.layerGroup(overlay.group.layers.map(l => toLayer(l, overlay.group.style)));
      overlays[overlay.group.name] = group;
      if (overlay.visible) {
        initial.push(group);
      }
    }

    const map = L.map("map", {
      center: [VIEW.center.lat, VIEW.center.lng],
      zoom: VIEW.zoom,
      layers: initial
    });

    L.control.layers(baseLayers, overlays, {
      collapsed: VIEW.layerControl.collapsed
    }).addTo(map);

    const legend = L.control({ position: VIEW.legend.position });
    legend.onAdd = function () {
      const div = L.DomUtil.create("div", "info legend");
      div.innerHTML = VIEW.legend.html;
      return div;
    };
    legend.addTo(map);
  </script>
</body>

</html>
"#;

pub const ERROR_PAGE_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    body { font: 16px/1.5 Arial, Helvetica, sans-serif; margin: 3rem auto; max-width: 40rem; color: #222; }
    .error { border-left: 4px solid #C70039; padding: 0.5rem 1rem; background: #fdf1f4; }
  </style>
</head>

<body>
  <h1>The earthquake map could not be built</h1>
  <p class="error">{{MESSAGE}}</p>
  <p>Check your network connection and the configured feed URLs, then run the render again.</p>
</body>

</html>
"#;
