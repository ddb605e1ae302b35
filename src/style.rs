//! Stylesheet emitter
//!
//! One static sheet, themed through custom properties keyed off the
//! `data-theme` attribute the theme controller owns. Simple CSS transitions
//! only; staggered animation is a visual nicety the page does without.

pub const STYLESHEET: &str = r#":root {
  --bg: #ffffff;
  --bg-soft: #f9fafb;
  --bg-raised: #ffffff;
  --text: #111827;
  --text-soft: #4b5563;
  --text-faint: #9ca3af;
  --border: #e5e7eb;
  --primary: #2563eb;
  --primary-soft: #dbeafe;
  --green: #16a34a;
  --blue: #2563eb;
  --purple: #9333ea;
  --yellow: #ca8a04;
  --danger: #dc2626;
  --footer-bg: #111827;
}

[data-theme="dark"] {
  --bg: #111827;
  --bg-soft: #1f2937;
  --bg-raised: #1f2937;
  --text: #f9fafb;
  --text-soft: #d1d5db;
  --text-faint: #6b7280;
  --border: #374151;
  --primary: #3b82f6;
  --primary-soft: #1e3a8a;
  --footer-bg: #030712;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: "Inter", system-ui, -apple-system, sans-serif;
  background: var(--bg);
  color: var(--text);
  transition: background 0.3s, color 0.3s;
}

section { padding: 5rem 1.5rem; scroll-margin-top: 5rem; }
section:nth-of-type(even) { background: var(--bg-soft); }

h1 { font-size: 3rem; margin: 0 0 1rem; }
h2 { font-size: 2.25rem; margin: 0 0 1rem; }
h3 { font-size: 1.5rem; margin: 0 0 0.75rem; }
h4 { margin: 0 0 0.5rem; }

.icon { vertical-align: middle; }
.icon-spin { animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }

/* Header */
#site-header {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 50;
  background: transparent;
  transition: background 0.3s, box-shadow 0.3s;
}
#site-header.scrolled {
  background: color-mix(in srgb, var(--bg) 85%, transparent);
  backdrop-filter: blur(8px);
  box-shadow: 0 1px 8px rgb(0 0 0 / 0.08);
}
#site-header nav {
  max-width: 72rem;
  margin: 0 auto;
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4rem;
  padding: 0 1.5rem;
}
.brand { font-weight: 700; font-size: 1.25rem; color: var(--text); text-decoration: none; }
.nav-desktop { display: flex; align-items: center; gap: 1.5rem; }
.nav-desktop a { color: var(--text-soft); text-decoration: none; font-weight: 500; }
.nav-desktop a:hover { color: var(--primary); }
.nav-mobile { display: none; }
.nav-mobile-controls { display: none; }
.menu-toggle { background: none; border: none; color: var(--text-soft); cursor: pointer; }
.icon-close { display: none; }
body.menu-open .icon-close { display: inline; }
body.menu-open .icon-menu { display: none; }

@media (max-width: 768px) {
  .nav-desktop { display: none; }
  .nav-mobile-controls { display: flex; align-items: center; gap: 0.5rem; }
  body.menu-open .nav-mobile {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 4rem;
    left: 1rem;
    right: 1rem;
    padding: 1rem;
    gap: 0.5rem;
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    box-shadow: 0 10px 30px rgb(0 0 0 / 0.15);
  }
  .nav-mobile a { color: var(--text-soft); text-decoration: none; padding: 0.5rem; }
}

/* Buttons */
.btn-primary, .btn-secondary, .btn-light, .btn-dark, .btn-submit {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 0.5rem;
  border: none;
  font-weight: 500;
  cursor: pointer;
  text-decoration: none;
  transition: background 0.2s, transform 0.2s;
}
.btn-primary { background: var(--primary); color: #fff; }
.btn-secondary { background: var(--bg-raised); color: var(--text); border: 1px solid var(--border); }
.btn-light { background: #fff; color: var(--primary); }
.btn-dark { background: #374151; color: #fff; }
.btn-submit { width: 100%; background: var(--primary); color: #fff; }
.btn-disabled { background: var(--text-faint); cursor: not-allowed; }

/* Hero */
.hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; }
.hero-grid { display: grid; gap: 3rem; max-width: 72rem; margin: 0 auto; align-items: center; }
@media (min-width: 1024px) { .hero-grid { grid-template-columns: 1fr 1fr; } }
.hero-greeting {
  display: inline-block;
  padding: 0.5rem 1rem;
  background: var(--primary-soft);
  color: var(--primary);
  border-radius: 9999px;
  font-size: 0.875rem;
  margin-bottom: 1rem;
}
.hero-title { color: var(--primary); }
.hero-tagline { font-size: 1.125rem; color: var(--text-soft); max-width: 36rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin: 2rem 0; }
.hero-socials { display: flex; gap: 1rem; }
.social-button {
  display: inline-flex;
  padding: 0.75rem;
  border-radius: 9999px;
  background: var(--bg-raised);
  color: var(--text-soft);
  border: 1px solid var(--border);
  transition: transform 0.3s, color 0.3s;
}
.social-button:hover { transform: scale(1.1); color: var(--primary); }
.hero-portrait { display: flex; justify-content: center; }
.portrait-frame { position: relative; }
.portrait-frame > img {
  width: 18rem;
  height: 18rem;
  border-radius: 9999px;
  object-fit: cover;
  border: 8px solid var(--bg-raised);
  box-shadow: 0 20px 50px rgb(0 0 0 / 0.2);
}
.floating-badge {
  position: absolute;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem;
  background: var(--bg-raised);
  border-radius: 0.5rem;
  box-shadow: 0 8px 20px rgb(0 0 0 / 0.12);
  font-size: 0.875rem;
  font-weight: 500;
}
.badge-right { right: -1rem; top: 4rem; }
.badge-left { left: -1rem; bottom: 4rem; }
.scroll-indicator {
  align-self: center;
  margin-top: 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  color: var(--text-faint);
  font-size: 0.875rem;
  cursor: pointer;
}

/* Section scaffolding */
.section-header { text-align: center; max-width: 42rem; margin: 0 auto 4rem; }
.divider { width: 5rem; height: 0.25rem; background: var(--primary); margin: 0 auto 1.5rem; }
.blurb { color: var(--text-soft); }

.stat-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; max-width: 72rem; margin: 0 auto 3rem; }
@media (min-width: 768px) { .stat-grid { grid-template-columns: repeat(4, 1fr); } }
.stat-grid-3 { grid-template-columns: repeat(1, 1fr); }
@media (min-width: 768px) { .stat-grid-3 { grid-template-columns: repeat(3, 1fr); } }
.stat-card {
  text-align: center;
  padding: 1.5rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 2px 8px rgb(0 0 0 / 0.06);
}
.stat-value { font-size: 1.875rem; font-weight: 700; }
.stat-label { color: var(--text-soft); }
.accent-primary { color: var(--primary); }
.accent-green { color: var(--green); }
.accent-blue { color: var(--blue); }
.accent-purple { color: var(--purple); }

.tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag {
  padding: 0.25rem 0.75rem;
  background: var(--bg-soft);
  border: 1px solid var(--border);
  color: var(--text-soft);
  border-radius: 9999px;
  font-size: 0.875rem;
}
.tag-more { background: transparent; }

.empty-state { text-align: center; padding: 3rem 1rem; color: var(--text-faint); }
.empty-state h3 { color: var(--text-soft); }

.cta-panel { border-radius: 1rem; padding: 2rem; text-align: center; color: #fff; max-width: 72rem; margin: 4rem auto 0; }
.cta-gradient { background: linear-gradient(to right, var(--primary), var(--purple)); }
.cta-dark { background: linear-gradient(to right, #111827, #1f2937); }
.cta-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-top: 1.5rem; }

/* About */
.about-grid { display: grid; gap: 3rem; max-width: 72rem; margin: 0 auto 4rem; align-items: center; }
@media (min-width: 1024px) { .about-grid { grid-template-columns: 1fr 1fr; } }
.about-portrait { position: relative; justify-self: center; }
.about-portrait > img { width: 20rem; height: 20rem; border-radius: 1rem; object-fit: cover; }
.stat-float {
  position: absolute;
  background: var(--bg-raised);
  border-radius: 0.5rem;
  box-shadow: 0 8px 20px rgb(0 0 0 / 0.12);
  padding: 1rem;
}
.stat-years { bottom: -1.5rem; right: -1.5rem; }
.stat-projects { top: -1.5rem; left: -1.5rem; }
.quick-info { background: var(--bg-soft); border-radius: 0.5rem; padding: 1.5rem; margin-top: 1.5rem; }
.info-row { display: flex; align-items: center; gap: 0.75rem; margin: 0.75rem 0; color: var(--text-soft); }
.about-traits { display: grid; gap: 2rem; max-width: 72rem; margin: 0 auto; text-align: center; }
@media (min-width: 768px) { .about-traits { grid-template-columns: repeat(3, 1fr); } }
.trait-icon {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  border-radius: 9999px;
  background: var(--primary-soft);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
}
.value-row { display: flex; align-items: center; justify-content: center; gap: 0.5rem; margin: 0.5rem 0; }
.fact { background: var(--bg-soft); border-radius: 0.5rem; padding: 0.5rem; margin: 0.75rem 0; font-size: 0.875rem; }

/* Skills */
.category-tabs { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 3rem; }
.tab {
  padding: 0.75rem 1.5rem;
  border-radius: 0.5rem;
  border: none;
  background: var(--bg-raised);
  color: var(--text-soft);
  font-weight: 500;
  cursor: pointer;
}
.tab-active { background: var(--primary); color: #fff; }
.category-intro { text-align: center; margin-bottom: 2rem; }
.skill-grid { display: grid; gap: 1.5rem; max-width: 72rem; margin: 0 auto 3rem; }
@media (min-width: 768px) { .skill-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .skill-grid { grid-template-columns: repeat(3, 1fr); } }
.skill-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 1.5rem;
  box-shadow: 0 2px 8px rgb(0 0 0 / 0.06);
}
.skill-card-head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.skill-identity { display: flex; align-items: center; gap: 0.75rem; }
.level-pill { padding: 0.25rem 0.5rem; border-radius: 9999px; color: #fff; font-size: 0.75rem; font-weight: 500; }
.level-expert { background: var(--green); }
.level-advanced { background: var(--blue); }
.level-intermediate { background: var(--yellow); }
.level-beginner { background: var(--text-faint); }
.progress-track { width: 100%; height: 0.5rem; background: var(--border); border-radius: 9999px; }
.progress-fill { height: 0.5rem; border-radius: 9999px; background: var(--primary); transition: width 0.3s; }
.skill-years { color: var(--text-soft); font-size: 0.875rem; margin: 0.75rem 0 0; }
.legend { background: var(--bg-raised); border: 1px solid var(--border); border-radius: 0.5rem; padding: 1.5rem; max-width: 72rem; margin: 0 auto; }
.legend > h4 { text-align: center; }
.legend-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
@media (min-width: 768px) { .legend-grid { grid-template-columns: repeat(4, 1fr); } }
.legend-row { display: flex; align-items: center; gap: 0.75rem; }
.legend-swatch { width: 1rem; height: 1rem; border-radius: 0.25rem; }
.legend-expert { background: var(--green); }
.legend-advanced { background: var(--blue); }
.legend-intermediate { background: var(--yellow); }
.legend-beginner { background: var(--text-faint); }
.legend-name { font-weight: 500; }
.legend-blurb { font-size: 0.875rem; color: var(--text-soft); }

/* Experience */
.timeline { position: relative; max-width: 56rem; margin: 0 auto; padding-left: 2rem; border-left: 1px solid var(--border); }
.timeline-entry { position: relative; padding-bottom: 3rem; }
.timeline-dot {
  position: absolute;
  left: -2.4rem;
  top: 1.5rem;
  width: 0.75rem;
  height: 0.75rem;
  background: var(--primary);
  border: 4px solid var(--bg);
  border-radius: 9999px;
}
.entry-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 1.5rem;
  box-shadow: 0 2px 8px rgb(0 0 0 / 0.06);
}
.entry-head { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; margin-bottom: 1rem; }
.company { color: var(--primary); font-weight: 600; text-decoration: none; }
.company-logo { width: 3rem; height: 3rem; border-radius: 0.5rem; object-fit: contain; }
.entry-meta { text-align: right; color: var(--text-soft); font-size: 0.875rem; }
.meta-row { display: flex; align-items: center; justify-content: flex-end; gap: 0.5rem; margin: 0.25rem 0; }
.period-current { color: var(--green); font-weight: 500; }
.entry-description { color: var(--text-soft); line-height: 1.6; }
.entry-block { margin-top: 1rem; }
.achievements { list-style: none; margin: 0; padding: 0; }
.achievements li { display: flex; gap: 0.5rem; margin: 0.5rem 0; color: var(--text-soft); font-size: 0.875rem; }

/* Projects */
.project-grid { display: grid; gap: 2rem; max-width: 80rem; margin: 0 auto; }
@media (min-width: 768px) { .project-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .project-grid { grid-template-columns: repeat(3, 1fr); } }
.project-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  overflow: hidden;
  box-shadow: 0 2px 8px rgb(0 0 0 / 0.06);
  transition: box-shadow 0.3s;
}
.project-card:hover { box-shadow: 0 12px 30px rgb(0 0 0 / 0.15); }
.project-cover { position: relative; height: 12rem; overflow: hidden; }
.project-cover img { width: 100%; height: 100%; object-fit: cover; }
.featured-pill, .status-pill {
  position: absolute;
  top: 1rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: 0.875rem;
  font-weight: 500;
}
.featured-pill { left: 1rem; background: var(--primary); color: #fff; }
.status-pill { right: 1rem; }
.status-completed { background: #dcfce7; color: #166534; }
.status-in-progress { background: #dbeafe; color: #1e40af; }
.status-planned { background: #fef9c3; color: #854d0e; }
.cover-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: rgb(0 0 0 / 0.5);
  opacity: 0;
  transition: opacity 0.3s;
}
.project-cover:hover .cover-overlay { opacity: 1; }
.overlay-link { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: 0.5rem; font-weight: 500; text-decoration: none; }
.overlay-demo { background: #fff; color: #111827; }
.overlay-source { background: #111827; color: #fff; }
.project-body { padding: 1.5rem; }
.project-head { display: flex; justify-content: space-between; align-items: flex-start; gap: 0.5rem; }
.team-size { display: flex; align-items: center; gap: 0.25rem; color: var(--text-soft); font-size: 0.875rem; }
.project-blurb { color: var(--text-soft); }
.project-meta { display: flex; justify-content: space-between; color: var(--text-faint); font-size: 0.875rem; margin-top: 1rem; }
.feature-preview { border-top: 1px solid var(--border); margin-top: 1rem; padding-top: 1rem; }
.feature-list { list-style: none; margin: 0; padding: 0; }
.feature-list li { display: flex; gap: 0.5rem; font-size: 0.875rem; color: var(--text-soft); margin: 0.25rem 0; }
.feature-more { color: var(--text-faint); }

/* Contact */
.contact-grid { display: grid; gap: 3rem; max-width: 72rem; margin: 0 auto; }
@media (min-width: 1024px) { .contact-grid { grid-template-columns: 1fr 1fr; } }
.form-panel { background: var(--bg-soft); border-radius: 1rem; padding: 2rem; }
.form-field { margin-bottom: 1.5rem; }
.form-field label { display: block; font-size: 0.875rem; font-weight: 500; color: var(--text-soft); margin-bottom: 0.5rem; }
.form-field input, .form-field textarea {
  width: 100%;
  padding: 0.875rem 1rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: var(--bg-raised);
  color: var(--text);
  font-size: 1rem;
  resize: none;
}
.form-field input:focus, .form-field textarea:focus { outline: 2px solid var(--primary); border-color: transparent; }
.field-error { color: var(--danger); font-size: 0.875rem; min-height: 1rem; margin: 0.25rem 0 0; }
.hp-field { display: none; }
.form-banner { display: flex; align-items: center; gap: 0.75rem; padding: 1rem; border-radius: 0.5rem; margin-top: 1.5rem; }
.banner-success { background: #f0fdf4; border: 1px solid #bbf7d0; color: #166534; }
.banner-error { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; }
form:not(.phase-success) .banner-success { display: none; }
form:not(.phase-error) .banner-error { display: none; }
.contact-methods { display: flex; flex-direction: column; gap: 1.5rem; }
.contact-method { display: flex; gap: 1rem; }
.method-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 0.5rem;
  background: var(--primary-soft);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
}
.method-value { color: var(--primary); font-weight: 500; text-decoration: none; }
.connect { margin-top: 2rem; }
.social-row { display: flex; gap: 1rem; }
.note-panel { display: flex; gap: 0.75rem; border-radius: 0.5rem; padding: 1.5rem; margin-top: 2rem; }
.note-response { background: var(--primary-soft); border: 1px solid var(--border); }
.note-preferred { background: #fefce8; border: 1px solid #fef08a; }
[data-theme="dark"] .note-preferred { background: #422006; border-color: #713f12; }

/* Footer */
footer { background: var(--footer-bg); color: #f9fafb; padding: 3rem 1.5rem 2rem; }
.footer-grid { display: grid; gap: 2rem; max-width: 72rem; margin: 0 auto; }
@media (min-width: 768px) { .footer-grid { grid-template-columns: repeat(3, 1fr); } }
.footer-identity p, .footer-row { color: #9ca3af; }
.footer-row { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; margin: 0.5rem 0; }
.footer-row a { color: inherit; text-decoration: none; }
.footer-row a:hover { color: #fff; }
.footer-links { display: flex; flex-direction: column; }
.footer-links a { color: #9ca3af; text-decoration: none; margin: 0.25rem 0; }
.footer-links a:hover { color: #fff; }
.footer-connect .social-button { background: #1f2937; border-color: #374151; color: #9ca3af; }
.footer-connect .btn-resume { margin-top: 1.5rem; }
.footer-bar {
  max-width: 72rem;
  margin: 2rem auto 0;
  padding-top: 1.5rem;
  border-top: 1px solid #374151;
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  color: #9ca3af;
  font-size: 0.875rem;
}

/* Theme toggle */
.theme-toggle {
  background: var(--bg-soft);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 0.5rem;
  color: var(--yellow);
  cursor: pointer;
}
.icon-moon { display: none; }
[data-theme="dark"] .icon-moon { display: inline; color: var(--blue); }
[data-theme="dark"] .icon-sun { display: none; }
"#;

/// The emitted stylesheet
pub fn emit() -> &'static str {
    STYLESHEET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_themes_through_the_data_attribute() {
        assert!(emit().contains("[data-theme=\"dark\"]"));
    }

    #[test]
    fn level_classes_cover_all_four_levels() {
        for level in ["expert", "advanced", "intermediate", "beginner"] {
            assert!(emit().contains(&format!(".level-{level}")), "{level}");
        }
    }

    #[test]
    fn honeypot_is_hidden() {
        assert!(emit().contains(".hp-field { display: none; }"));
    }
}
