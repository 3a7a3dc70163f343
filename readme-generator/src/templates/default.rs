//! Built-in README template.

/// Template used when no custom template is supplied.
///
/// Every placeholder is a plain `{{name}}` expression, so the text renders
/// with any complete [`TemplateVariables`](crate::extract::TemplateVariables).
pub const DEFAULT_TEMPLATE: &str = r#"# {{repo_name}}

{{description}}

## Overview

{{overview}}

## Features

{{features}}

## Installation

```bash
git clone https://github.com/{{owner}}/{{repo_name}}.git
cd {{repo_name}}
```

{{install_instructions}}

## Usage

{{usage_instructions}}

## Technology Stack

{{tech_stack}}

## Repository Information

- **Created:** {{created_date}}
- **Last Updated:** {{updated_date}}
- **Stars:** {{stars}}
- **Forks:** {{forks}}
- **Open Issues:** {{open_issues}}
- **License:** {{license}}
- **Primary Language:** {{primary_language}}

## Links

- **Repository:** [{{repo_url}}]({{repo_url}})
{{homepage_link}}

## Contributing

Contributions are welcome! Please feel free to submit a Pull Request.

## License

{{license_info}}

---

*This README was generated on {{generation_date}}*
"#;
