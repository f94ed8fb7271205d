//! The single-page upload form.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>GroqLLaVAMA Econometrics Agent</title>
<style>
  body { font-family: system-ui, sans-serif; display: flex; flex-direction: column; align-items: center; margin: 0; padding: 20px; background: #fafafa; }
  #title, #description { text-align: center; margin: 20px; }
  form, .outputs { width: 100%; max-width: 960px; display: flex; flex-direction: column; gap: 12px; }
  .outputs { flex-direction: row; margin-top: 16px; }
  .outputs label { flex: 1; display: flex; flex-direction: column; }
  textarea { min-height: 16em; font-family: inherit; }
  .buttons { display: flex; gap: 8px; }
  button { padding: 8px 16px; cursor: pointer; }
  #footer { text-align: center; margin-top: 30px; padding: 10px; font-size: 14px; }
</style>
</head>
<body>
<h1 id="title">GroqLLaVAMA Econometrics Agent</h1>
<p id="description">Upload an economic chart and get a detailed analysis using Groq + LLaVA V1.5 7B multimodal + llama-3.1-70b.</p>

<form id="analyze-form">
  <label>GROQ API Key
    <input type="password" name="api_key" placeholder="Enter your GROQ API Key" autocomplete="off">
  </label>
  <label>Upload an Image
    <input type="file" name="image" accept="image/*">
  </label>
  <label>Prompt (optional)
    <input type="text" name="prompt" placeholder="Describe this image in detail.">
  </label>
  <div class="buttons">
    <button type="submit" id="report-button">Generate Report</button>
    <button type="button" id="clear-button">Clear</button>
  </div>
</form>

<div class="outputs">
  <label>Image Description<textarea id="description-box" readonly></textarea></label>
  <label>Report<textarea id="report-box" readonly></textarea></label>
</div>

<div id="footer">EconoMind</div>

<script>
  const form = document.getElementById("analyze-form");
  const descriptionBox = document.getElementById("description-box");
  const reportBox = document.getElementById("report-box");
  const button = document.getElementById("report-button");

  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    button.disabled = true;
    descriptionBox.value = "Working...";
    reportBox.value = "";
    try {
      const response = await fetch("/api/analyze", { method: "POST", body: new FormData(form) });
      const body = await response.json();
      if (!response.ok) {
        descriptionBox.value = body.error || ("Request failed: " + response.status);
        return;
      }
      descriptionBox.value = body.description;
      reportBox.value = body.report;
    } catch (err) {
      descriptionBox.value = "Request failed: " + err;
    } finally {
      button.disabled = false;
    }
  });

  document.getElementById("clear-button").addEventListener("click", () => {
    form.reset();
    descriptionBox.value = "";
    reportBox.value = "";
  });
</script>
</body>
</html>
"#;
