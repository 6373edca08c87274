//! Global CSS styles for the form screen.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #f5f5f5;
  --surface-card: #fff;
  --overlay: rgba(0, 0, 0, 0.5);

  /* Accents */
  --blue: #3498db;
  --sky-blue: #2196F3;
  --green: #4CAF50;
  --danger: #e74c3c;

  /* Text */
  --text-primary: #333;
  --text-on-accent: #fff;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
  background: var(--surface);
  color: var(--text-primary);
}

/* === Screen === */
.screen {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  padding: 16px;
}

.screen-title {
  font-size: 30px;
  font-weight: normal;
  margin-bottom: 20px;
  color: var(--text-primary);
}

.form-container {
  width: 100%;
  margin-bottom: 20px;
}

/* === Inputs === */
.form-input {
  display: block;
  width: 100%;
  height: 40px;
  margin-bottom: 10px;
  padding: 0 10px;
  border: 1px solid var(--blue);
  border-radius: 5px;
  background: var(--surface-card);
  font-size: 16px;
  color: var(--text-primary);
}

.form-input:focus {
  outline: none;
  box-shadow: 0 0 0 2px rgba(52, 152, 219, 0.3);
}

/* === Buttons === */
.btn-primary {
  background: var(--blue);
  color: var(--text-on-accent);
  border: none;
  padding: 15px 20px;
  border-radius: 10px;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.btn-primary:active {
  opacity: 0.6;
}

.btn-primary .button-text {
  font-size: 18px;
}

.btn-confirm {
  display: block;
  margin: 10px 0 0 auto;
  background: var(--sky-blue);
  color: var(--text-on-accent);
  border: none;
  padding: 10px 20px;
  border-radius: 5px;
  cursor: pointer;
}

.btn-confirm .button-text {
  font-size: 16px;
}

/* === Loading === */
.loading-indicator {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.spinner {
  margin-top: 20px;
  border-radius: 50%;
  border-style: solid;
  border-color: var(--green);
  border-top-color: transparent;
  width: 36px;
  height: 36px;
  border-width: 4px;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.loading-text {
  margin-top: 10px;
  font-size: 16px;
  color: var(--green);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  justify-content: center;
  align-items: center;
  background: var(--overlay);
  animation: fade-in var(--transition-fast);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.modal-content {
  width: 80%;
  padding: 20px;
  border: 2px solid var(--green);
  border-radius: 10px;
  background: var(--surface-card);
}

.modal-title {
  font-size: 24px;
  font-weight: bold;
  color: var(--green);
  margin-bottom: 10px;
  text-align: left;
}

.result-container {
  margin-top: 20px;
}

.result-text {
  margin-bottom: 10px;
  font-size: 18px;
  color: var(--text-primary);
}

/* === Validation Alert === */
.alert-content {
  width: 80%;
  padding: 20px;
  border-radius: 10px;
  background: var(--surface-card);
}

.alert-title {
  font-size: 20px;
  color: var(--danger);
  margin-bottom: 10px;
}

.alert-message {
  font-size: 16px;
}
"#;
