use crate::parsed::ParsedType;

/// Renders a qualified tree into its canonical, charset-safe form.
///
/// Never fails. After flattening, the result is trimmed, `.` and `-` become
/// `_`, and `/` becomes `__`.
pub fn render(ty: &ParsedType) -> String {
    let mut out = String::new();
    render_into(ty, &mut out);
    sanitize(&out)
}

fn render_into(ty: &ParsedType, out: &mut String) {
    match ty {
        ParsedType::Named {
            package,
            name,
            generic_args,
        } => {
            if !package.is_empty() {
                out.push_str(package);
                out.push('.');
            }
            out.push_str(name);
            if !generic_args.is_empty() {
                out.push('[');
                for (idx, arg) in generic_args.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    render_into(arg, out);
                }
                out.push(']');
            }
        }
        ParsedType::Slice { length, element } => {
            out.push_str("arr_");
            if let Some(length) = length {
                out.push_str(&length.to_string());
                out.push('_');
            }
            render_into(element, out);
        }
        ParsedType::Map { key, value } => {
            out.push_str("map_");
            render_into(key, out);
            out.push_str("_to_");
            render_into(value, out);
        }
        ParsedType::Pointer { element } => {
            out.push_str("ptr_");
            render_into(element, out);
        }
    }
}

fn sanitize(raw: &str) -> String {
    raw.trim()
        .replace('.', "_")
        .replace('-', "_")
        .replace('/', "__")
}
