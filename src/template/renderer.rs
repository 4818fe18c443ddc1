//! 模板渲染器

use crate::domain::models::Alias;
use crate::template::{ListTemplate, Segment, TemplateField};

/// 对每个别名渲染一次模板，`index` 从 0 开始
pub fn render(template: &ListTemplate, aliases: &[Alias]) -> String {
    let mut out = String::new();

    for (index, alias) in aliases.iter().enumerate() {
        for segment in template.segments() {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&field_value(*field, index, alias)),
            }
        }
    }

    out
}

fn field_value(field: TemplateField, index: usize, alias: &Alias) -> String {
    match field {
        TemplateField::Index => index.to_string(),
        TemplateField::Alias => alias.name.clone(),
        TemplateField::Key => alias.key.clone(),
        TemplateField::Value => alias.value.clone(),
        TemplateField::Type => alias.mode.to_string(),
        TemplateField::Desc => alias.short_desc.clone(),
        TemplateField::LongDesc => alias.long_desc.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AliasMode;

    fn aliases() -> Vec<Alias> {
        vec![
            Alias::new("dev", "STAGE", "development", AliasMode::Overwrite),
            Alias::new("jdk", "PATH", "C:\\jdk\\bin", AliasMode::Append).with_desc("jdk", ""),
        ]
    }

    #[test]
    fn test_render_each_item() {
        let template = ListTemplate::parse("{{index}}:{{alias}}:{{key}}={{value}}:{{type}}\n").unwrap();
        assert_eq!(
            template.render(&aliases()),
            "0:dev:STAGE=development:0\n1:jdk:PATH=C:\\jdk\\bin:1\n"
        );
    }

    #[test]
    fn test_render_default_format() {
        let rendered = ListTemplate::default().render(&aliases()[..1]);
        assert_eq!(
            rendered,
            "别名0:\n\talias:dev\n\tkey:STAGE\n\tvalue:development\n\ttype:0\n"
        );
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(ListTemplate::default().render(&[]), "");
    }

    #[test]
    fn test_render_desc_fields() {
        let template = ListTemplate::parse("[{{desc}}|{{longDesc}}]").unwrap();
        assert_eq!(template.render(&aliases()), "[|][jdk|]");
    }
}
