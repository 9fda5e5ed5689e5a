//! Field names in validation reports use the camelCase of the wire format.

/// `number_of_gears` becomes `numberOfGears`; single-word names pass through unchanged.
pub fn to_camel_case(field: &str) -> String {
    let mut words = field.split('_').filter(|w| !w.is_empty());
    let mut out = words.next().unwrap_or_default().to_string();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_fields_become_wire_names() {
        assert_eq!(to_camel_case("number_of_gears"), "numberOfGears");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("id"), "id");
    }
}
