//! Embedded Tera templates for the list and add pages.
//!
//! Templates are compiled in as raw strings and registered under `.html`
//! names so Tera's HTML autoescaping applies to everything user-submitted.
//! `list.html` and `add.html` both extend `base.html`.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;
use crate::forms::{FormErrors, RawTaskForm, Task};

pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_HTML),
            ("list.html", LIST_HTML),
            ("add.html", ADD_HTML),
        ])?;
        Ok(Self { tera })
    }

    pub fn render_list(&self, tasks: &[Task]) -> Result<String> {
        let mut context = Context::new();
        context.insert("tasks", tasks);
        Ok(self.tera.render("list.html", &context)?)
    }

    pub fn render_add(&self, form: &AddFormView) -> Result<String> {
        let context = Context::from_serialize(form)?;
        Ok(self.tera.render("add.html", &context)?)
    }
}

/// Rendering model for the add form: current field values plus per-field
/// error messages, empty on the display branch.
#[derive(Debug, Clone, Serialize)]
pub struct AddFormView {
    pub csrf_token: String,
    pub task_value: String,
    pub priority_value: String,
    pub task_error: Option<String>,
    pub priority_error: Option<String>,
}

impl AddFormView {
    pub fn empty(csrf_token: String) -> Self {
        Self {
            csrf_token,
            task_value: String::new(),
            priority_value: String::new(),
            task_error: None,
            priority_error: None,
        }
    }

    /// Pre-fill the form with a rejected submission and its field errors.
    pub fn with_submission(csrf_token: String, raw: &RawTaskForm, errors: &FormErrors) -> Self {
        Self {
            csrf_token,
            task_value: raw.task.clone().unwrap_or_default(),
            priority_value: raw.priority.clone().unwrap_or_default(),
            task_error: errors.task.clone(),
            priority_error: errors.priority.clone(),
        }
    }
}

const BASE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}Taskpad{% endblock title %}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 0;
            background-color: #f5f5f5;
        }
        .header {
            background-color: #2c3e50;
            color: white;
            padding: 20px;
            text-align: center;
        }
        .container {
            max-width: 640px;
            margin: 0 auto;
            padding: 20px;
        }
        .card {
            background-color: white;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            padding: 20px;
            margin-bottom: 20px;
        }
        h2 {
            margin-top: 0;
            color: #2c3e50;
        }
        .error {
            color: #e74c3c;
            font-size: 14px;
            margin: 4px 0 12px;
        }
        label {
            display: block;
            margin-top: 12px;
            color: #666;
        }
        input {
            padding: 6px;
            margin-top: 4px;
        }
        button {
            margin-top: 16px;
            padding: 8px 16px;
            background-color: #3498db;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }
    </style>
</head>
<body>
    <div class="header">
        <h1>Taskpad</h1>
    </div>
    <div class="container">
        {% block content %}{% endblock content %}
    </div>
</body>
</html>
"#;

const LIST_HTML: &str = r#"{% extends "base.html" %}
{% block title %}Tasks{% endblock title %}
{% block content %}
<div class="card">
    <h2>Tasks</h2>
    {% if tasks | length > 0 %}
    <ul>
        {% for item in tasks %}
        <li>{{ item.task }} <small>(priority {{ item.priority }})</small></li>
        {% endfor %}
    </ul>
    {% else %}
    <p>No tasks.</p>
    {% endif %}
    <a href="/tasks/add">Add a new task</a>
</div>
{% endblock content %}
"#;

const ADD_HTML: &str = r#"{% extends "base.html" %}
{% block title %}Add Task{% endblock title %}
{% block content %}
<div class="card">
    <h2>Add Task</h2>
    <form action="/tasks/add" method="post">
        <input type="hidden" name="csrf_token" value="{{ csrf_token }}">
        <label for="task">New Task</label>
        <input type="text" id="task" name="task" value="{{ task_value }}">
        {% if task_error %}<p class="error">{{ task_error }}</p>{% endif %}
        <label for="priority">Priority</label>
        <input type="number" id="priority" name="priority" min="1" max="10" value="{{ priority_value }}">
        {% if priority_error %}<p class="error">{{ priority_error }}</p>{% endif %}
        <button type="submit">Add</button>
    </form>
    <a href="/tasks">Back to tasks</a>
</div>
{% endblock content %}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().unwrap()
    }

    fn task(text: &str, priority: i64) -> Task {
        Task {
            task: text.to_string(),
            priority,
        }
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = engine().render_list(&[]).unwrap();
        assert!(html.contains("No tasks."));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn tasks_render_in_order() {
        let html = engine()
            .render_list(&[task("first", 1), task("second", 2)])
            .unwrap();
        assert!(!html.contains("No tasks."));
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn task_text_is_html_escaped() {
        let html = engine()
            .render_list(&[task("<script>alert(1)</script>", 5)])
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_form_has_csrf_and_no_errors() {
        let html = engine()
            .render_add(&AddFormView::empty("token123".to_string()))
            .unwrap();
        assert!(html.contains("name=\"csrf_token\" value=\"token123\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn rejected_submission_renders_values_and_errors() {
        let raw = RawTaskForm {
            task: Some("Pay bills".to_string()),
            priority: Some("15".to_string()),
        };
        let errors = raw.validate().unwrap_err();
        let html = engine()
            .render_add(&AddFormView::with_submission(
                "token".to_string(),
                &raw,
                &errors,
            ))
            .unwrap();
        assert!(html.contains("value=\"Pay bills\""));
        assert!(html.contains("value=\"15\""));
        assert!(html.contains("Ensure this value is between 1 and 10."));
    }
}
