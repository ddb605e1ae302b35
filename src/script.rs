//! Page script emitter
//!
//! The browser half of the behavior modeled in `theme`, `nav`, `form`, and
//! `resume`. The template is filled from the same constants those modules
//! use, so the page cannot drift from the tested model. Everything here is
//! plain substitution; no logic lives in the template that is not also in
//! the Rust modules.

use crate::content::model::Content;
use crate::form;
use crate::resume;
use crate::theme::THEME_KEY;

const TEMPLATE: &str = r#"'use strict';

// Theme: two states, persisted under one well-known key.
var THEME_KEY = '__THEME_KEY__';
var root = document.documentElement;

function applyTheme(theme) {
  root.setAttribute('data-theme', theme);
}

function initTheme() {
  var stored = null;
  try { stored = localStorage.getItem(THEME_KEY); } catch (e) { /* storage denied */ }
  if (stored === 'light' || stored === 'dark') {
    applyTheme(stored);
  }
}

function toggleTheme() {
  var next = root.getAttribute('data-theme') === 'dark' ? 'light' : 'dark';
  try { localStorage.setItem(THEME_KEY, next); } catch (e) { return; }
  applyTheme(next);
}

// Navigation: smooth scroll, silent on a missing target, always closes the
// mobile menu.
function goTo(sectionId) {
  document.body.classList.remove('menu-open');
  var target = document.getElementById(sectionId);
  if (target) {
    target.scrollIntoView({ behavior: 'smooth' });
  }
}

// Contact form: validate, send once, show a banner, revert after a fixed
// window.
var MIN_NAME = __MIN_NAME__;
var MIN_SUBJECT = __MIN_SUBJECT__;
var MIN_MESSAGE = __MIN_MESSAGE__;
var EMAIL_SHAPE = /^[^\s@]+@[^\s@]+\.[^\s@]+$/;
var REVERT_MS = __REVERT_MS__;
var ENDPOINT = '__ENDPOINT__';
var submitting = false;

function fieldErrors(values) {
  var errors = {};
  if ([...values.name].length < MIN_NAME) {
    errors.name = 'Name must be at least ' + MIN_NAME + ' characters';
  }
  if (!EMAIL_SHAPE.test(values.email)) {
    errors.email = 'Please enter a valid email address';
  }
  if ([...values.subject].length < MIN_SUBJECT) {
    errors.subject = 'Subject must be at least ' + MIN_SUBJECT + ' characters';
  }
  if ([...values.message].length < MIN_MESSAGE) {
    errors.message = 'Message must be at least ' + MIN_MESSAGE + ' characters';
  }
  return errors;
}

function showErrors(formEl, errors) {
  ['name', 'email', 'subject', 'message'].forEach(function (name) {
    var slot = formEl.querySelector('[data-error-for="' + name + '"]');
    if (slot) { slot.textContent = errors[name] || ''; }
  });
}

function setBanner(formEl, phase) {
  formEl.classList.remove('phase-success', 'phase-error');
  if (phase) { formEl.classList.add('phase-' + phase); }
}

function submitContact(formEl) {
  if (submitting) { return; }
  var values = {
    name: formEl.elements.name.value,
    email: formEl.elements.email.value,
    subject: formEl.elements.subject.value,
    message: formEl.elements.message.value
  };
  var errors = fieldErrors(values);
  showErrors(formEl, errors);
  if (Object.keys(errors).length > 0) { return; }

  submitting = true;
  var button = formEl.querySelector('[type="submit"]');
  if (button) { button.disabled = true; }

  var payload = new URLSearchParams();
  payload.append('form-name', '__FORM_NAME__');
  payload.append('name', values.name);
  payload.append('email', values.email);
  payload.append('subject', values.subject);
  payload.append('message', values.message);
  payload.append('__HONEYPOT__', formEl.elements['__HONEYPOT__'].value);

  fetch(ENDPOINT, {
    method: 'POST',
    headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
    body: payload.toString()
  }).then(function (response) {
    setBanner(formEl, response.ok ? 'success' : 'error');
    if (response.ok) { formEl.reset(); }
  }).catch(function () {
    setBanner(formEl, 'error');
  }).finally(function () {
    submitting = false;
    if (button) { button.disabled = false; }
    setTimeout(function () { setBanner(formEl, null); }, REVERT_MS);
  });
}

// Resume dispatch: classification by suffix only; unknown suffixes take the
// HTML branch.
var RESUME_URL = '__RESUME_URL__';
var PRINT_DELAY_MS = __PRINT_DELAY_MS__;

function resumeKind(locator) {
  var lower = locator.toLowerCase();
  if (lower.endsWith('.pdf')) { return 'pdf'; }
  if (lower.endsWith('.html') || lower.endsWith('.htm')) { return 'html'; }
  return 'unknown';
}

function dispatchResume(action) {
  if (!RESUME_URL) {
    console.warn('no resume locator configured, nothing dispatched');
    return;
  }
  var kind = resumeKind(RESUME_URL);
  if (action === 'download') {
    var link = document.createElement('a');
    link.href = RESUME_URL;
    link.download = kind === 'pdf' ? 'resume.pdf' : 'resume.html';
    link.target = '_blank';
    link.rel = 'noopener noreferrer';
    document.body.appendChild(link);
    link.click();
    document.body.removeChild(link);
    return;
  }
  if (action === 'print' && kind !== 'pdf') {
    var opened = window.open(RESUME_URL, '_blank', 'noopener,noreferrer');
    if (opened) {
      setTimeout(function () { opened.print(); }, PRINT_DELAY_MS);
    } else {
      window.location.href = RESUME_URL;
    }
    return;
  }
  window.open(RESUME_URL, '_blank', 'noopener,noreferrer');
}

document.addEventListener('DOMContentLoaded', function () {
  initTheme();

  document.querySelectorAll('[data-theme-toggle]').forEach(function (button) {
    button.addEventListener('click', toggleTheme);
  });

  document.querySelectorAll('[data-scroll-to]').forEach(function (element) {
    element.addEventListener('click', function (event) {
      event.preventDefault();
      goTo(element.getAttribute('data-scroll-to'));
    });
  });

  var menuToggle = document.getElementById('menu-toggle');
  if (menuToggle) {
    menuToggle.addEventListener('click', function () {
      document.body.classList.toggle('menu-open');
    });
  }

  window.addEventListener('scroll', function () {
    var header = document.getElementById('site-header');
    if (header) {
      header.classList.toggle('scrolled', window.scrollY > 20);
    }
  });

  var contactForm = document.querySelector('form[name="__FORM_NAME__"]');
  if (contactForm) {
    contactForm.setAttribute('novalidate', 'novalidate');
    contactForm.addEventListener('submit', function (event) {
      event.preventDefault();
      submitContact(contactForm);
    });
  }

  document.querySelectorAll('[data-resume-action]').forEach(function (button) {
    button.addEventListener('click', function () {
      dispatchResume(button.getAttribute('data-resume-action'));
    });
  });
});
"#;

/// Fill the template from the model's constants
pub fn emit(content: &Content, endpoint: &str) -> String {
    let resume_url = content.personal.resume.as_deref().unwrap_or("");
    TEMPLATE
        .replace("__THEME_KEY__", THEME_KEY)
        .replace("__MIN_NAME__", &form::MIN_NAME.to_string())
        .replace("__MIN_SUBJECT__", &form::MIN_SUBJECT.to_string())
        .replace("__MIN_MESSAGE__", &form::MIN_MESSAGE.to_string())
        .replace("__REVERT_MS__", &form::STATUS_REVERT.as_millis().to_string())
        .replace("__FORM_NAME__", form::FORM_NAME)
        .replace("__HONEYPOT__", form::HONEYPOT_FIELD)
        .replace("__ENDPOINT__", &escape_js(endpoint))
        .replace("__RESUME_URL__", &escape_js(resume_url))
        .replace(
            "__PRINT_DELAY_MS__",
            &resume::PRINT_DELAY.as_millis().to_string(),
        )
}

/// Escape a value landing inside a single-quoted JS string literal
fn escape_js(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
}
