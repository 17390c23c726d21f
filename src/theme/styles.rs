//! Global CSS styles for Anchetas Bendición.
//!
//! Warm gift-shop aesthetic: rose gradients over cream, rounded cards.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CREAM (Backgrounds) */
  --cream-amber: #fffbeb;
  --cream-rose: #fff1f2;
  --cream-pink: #fdf2f8;

  /* ROSE (Primary, Actions, Accents) */
  --rose: #fb7185;
  --rose-deep: #f43f5e;
  --rose-border: #ffe4e6;
  --pink: #f472b6;

  /* GREEN (WhatsApp) */
  --green: #4ade80;
  --emerald: #10b981;

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* Typography */
  --font-display: Georgia, 'Times New Roman', serif;
  --font-body: 'Segoe UI', -apple-system, Helvetica, Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
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
  font-family: var(--font-body);
  background: linear-gradient(135deg, var(--cream-amber), var(--cream-rose), var(--cream-pink));
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page Shell === */
.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.page--centered {
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: rgba(255, 255, 255, 0.92);
  backdrop-filter: blur(6px);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
  padding: 1.25rem 1rem;
  text-align: center;
}

.site-title {
  font-family: var(--font-display);
  font-size: 2.5rem;
  font-weight: 900;
  background: linear-gradient(90deg, var(--rose), var(--pink), var(--rose));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  letter-spacing: -0.02em;
}

.site-tagline {
  font-size: 0.875rem;
  color: var(--text-muted);
  font-weight: 300;
  letter-spacing: 0.05em;
}

.catalog-main {
  flex: 1;
  width: 100%;
  max-width: 80rem;
  margin: 0 auto;
  padding: 2.5rem 1rem;
}

.site-footer {
  padding: 2rem 0;
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Loading / Error === */
.page-loading {
  text-align: center;
}

.loading-text {
  margin-top: 1rem;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.spinner {
  width: 2.5rem;
  height: 2.5rem;
  margin: 0 auto;
  border: 3px solid var(--rose-border);
  border-top-color: var(--rose);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

.spinner--large {
  width: 4rem;
  height: 4rem;
  border-width: 4px;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.error-card {
  background: rgba(255, 255, 255, 0.85);
  border: 1px solid var(--rose-border);
  border-radius: 1.5rem;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
  padding: 2rem;
  max-width: 28rem;
  width: 100%;
  text-align: center;
}

.error-icon {
  font-size: 3.5rem;
  display: block;
  margin-bottom: 1rem;
}

.error-title {
  font-size: 1.5rem;
  margin-bottom: 0.5rem;
}

.error-text {
  color: var(--text-secondary);
}

/* === Category Pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  justify-content: center;
  margin-bottom: 2rem;
}

.pill {
  padding: 0.625rem 1.5rem;
  border-radius: 9999px;
  border: 1px solid var(--rose-border);
  background: rgba(255, 255, 255, 0.8);
  color: var(--text-secondary);
  font-size: 0.95rem;
  font-weight: 500;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.pill:hover {
  background: #ffffff;
  color: var(--rose);
  transform: scale(1.05);
}

.pill--selected {
  background: linear-gradient(90deg, var(--rose), var(--pink));
  border-color: transparent;
  color: #ffffff;
  box-shadow: 0 2px 8px rgba(244, 63, 94, 0.25);
}

/* === Card Grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
}

.empty-state {
  text-align: center;
  padding: 5rem 0;
}

.empty-icon {
  font-size: 3.5rem;
  display: block;
  margin-bottom: 1rem;
  animation: pulse 2s ease-in-out infinite;
}

.empty-text {
  font-size: 1.125rem;
  color: var(--text-muted);
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.show-more {
  margin-top: 2rem;
  text-align: center;
}

.show-more__button {
  padding: 0.75rem 2rem;
  border-radius: 9999px;
  border: 1px solid var(--rose-border);
  background: #ffffff;
  color: var(--rose-deep);
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.show-more__button:hover {
  background: var(--cream-rose);
  transform: scale(1.03);
}

/* === Ancheta Card === */
.ancheta-card {
  background: rgba(255, 255, 255, 0.85);
  border: 1px solid var(--rose-border);
  border-radius: 1.5rem;
  overflow: hidden;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
  cursor: pointer;
  transition: all var(--transition-slow);
}

.ancheta-card:hover {
  box-shadow: 0 12px 28px rgba(0, 0, 0, 0.12);
  transform: translateY(-4px);
}

.card-image-area {
  position: relative;
  height: 18rem;
  background: linear-gradient(135deg, var(--cream-amber), var(--cream-rose), var(--cream-pink));
  overflow: hidden;
}

.card-image__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.ancheta-card:hover .card-image__img {
  transform: scale(1.05);
}

.card-image__img--hidden {
  opacity: 0;
}

.card-image__loading {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
}

.card-image__placeholder {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  height: 100%;
  padding: 1rem;
  gap: 0.75rem;
}

.card-image__placeholder-icon {
  font-size: 3.5rem;
  animation: pulse 2s ease-in-out infinite;
}

.card-image__drive-link {
  border: none;
  background: none;
  font-size: 0.75rem;
  color: var(--rose);
  text-decoration: underline;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.card-image__drive-link:hover {
  color: var(--rose-deep);
}

.card-badge {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  background: rgba(255, 255, 255, 0.95);
  border: 1px solid var(--rose-border);
  border-radius: 9999px;
  padding: 0.375rem 0.75rem;
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--rose);
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
}

.card-badge--modal {
  right: auto;
  left: 0.75rem;
}

.card-content {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  padding: 1.25rem;
}

.card-content__text {
  min-width: 0;
}

.card-title {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 700;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-price {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 900;
  background: linear-gradient(90deg, var(--rose), var(--pink));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.card-detail-button {
  flex-shrink: 0;
  padding: 0.625rem 1rem;
  border: none;
  border-radius: 0.75rem;
  background: linear-gradient(90deg, var(--rose), var(--pink));
  color: #ffffff;
  font-size: 0.875rem;
  font-weight: 600;
  cursor: pointer;
  box-shadow: 0 2px 6px rgba(244, 63, 94, 0.25);
  transition: transform var(--transition-normal);
}

.card-detail-button:hover {
  transform: scale(1.05);
}

.card-detail-button:active {
  transform: scale(0.95);
}

/* === Detail Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  animation: fade-in 200ms ease;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.detail-modal {
  background: #ffffff;
  border-radius: 1.5rem;
  max-width: 64rem;
  width: 100%;
  max-height: 90vh;
  display: flex;
  overflow: hidden;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
  animation: slide-up 300ms ease;
}

@keyframes slide-up {
  from { opacity: 0; transform: translateY(1.5rem); }
  to { opacity: 1; transform: translateY(0); }
}

.detail-modal__image {
  position: relative;
  flex-shrink: 0;
  width: 50%;
  background: linear-gradient(135deg, var(--cream-amber), var(--cream-rose), var(--cream-pink));
  overflow: hidden;
}

.detail-modal__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.detail-modal__close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  z-index: 10;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.95);
  color: var(--text-primary);
  font-size: 1rem;
  cursor: pointer;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
  transition: transform var(--transition-fast);
}

.detail-modal__close:active {
  transform: scale(0.9);
}

.detail-modal__info {
  flex: 1;
  display: flex;
  flex-direction: column;
  overflow: hidden;
}

.detail-modal__body {
  flex: 1;
  overflow-y: auto;
  padding: 2rem;
}

.detail-modal__title {
  font-family: var(--font-display);
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.detail-modal__price-block {
  margin-bottom: 1.25rem;
  padding-bottom: 1.25rem;
  border-bottom: 1px solid #f3f4f6;
}

.detail-modal__price-label {
  font-size: 0.75rem;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-bottom: 0.25rem;
}

.detail-modal__price {
  font-family: var(--font-display);
  font-size: 2.5rem;
  font-weight: 900;
  background: linear-gradient(90deg, var(--rose), var(--pink));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.detail-modal__description h3 {
  font-size: 1.125rem;
  margin-bottom: 0.5rem;
}

.detail-modal__description p {
  color: var(--text-secondary);
  line-height: 1.7;
}

.detail-modal__actions {
  flex-shrink: 0;
  padding: 1.5rem;
  border-top: 1px solid #f3f4f6;
}

/* === WhatsApp Button === */
.whatsapp-button {
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  padding: 1rem 1.5rem;
  border: none;
  border-radius: 1rem;
  background: linear-gradient(90deg, var(--green), var(--emerald));
  color: #ffffff;
  font-size: 1.125rem;
  font-weight: 700;
  cursor: pointer;
  box-shadow: 0 4px 12px rgba(16, 185, 129, 0.3);
  transition: all var(--transition-normal);
}

.whatsapp-button:hover {
  filter: brightness(0.95);
}

.whatsapp-button:active {
  transform: scale(0.97);
}

.whatsapp-button__icon {
  width: 1.5rem;
  height: 1.5rem;
}
"#;
