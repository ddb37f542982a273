use super::*;

fn profile() -> Profile {
    Profile {
        id: "uid-1".to_owned(),
        full_name: "Asha Iyer".to_owned(),
        age: "29".to_owned(),
        gender: "female".to_owned(),
        city: "Pune".to_owned(),
        state: "Maharashtra".to_owned(),
        country: "India".to_owned(),
    }
}

#[test]
fn greeting_uses_profile_name() {
    assert_eq!(greeting(Some(&profile())), "Welcome, Asha Iyer 👋");
}

#[test]
fn greeting_falls_back_without_profile() {
    assert_eq!(greeting(None), "Welcome, User 👋");
}

#[test]
fn greeting_falls_back_on_empty_name() {
    let mut p = profile();
    p.full_name.clear();
    assert_eq!(greeting(Some(&p)), "Welcome, User 👋");
}

#[test]
fn location_line_renders_city_and_country() {
    assert_eq!(location_line(Some(&profile())), "Location: Pune, India");
}

#[test]
fn location_line_renders_empty_placeholders_without_profile() {
    assert_eq!(location_line(None), "Location: , ");
}
