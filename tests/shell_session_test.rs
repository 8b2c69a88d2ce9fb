use anyhow::Result;
use chef_menu::core::session::Screen;
use chef_menu::{Course, MenuSettings, Session, Shell};
use std::io::Cursor;

fn run_script(script: &str) -> Result<(String, Session)> {
    let mut shell = Shell::new(Session::new(MenuSettings::default()));
    let mut output = Vec::new();
    shell.run(Cursor::new(script), &mut output)?;
    Ok((String::from_utf8(output)?, shell.into_session()))
}

/// 測試從新增畫面加入菜色並回到首頁
#[test]
fn test_add_and_save_flow() -> Result<()> {
    let script = "\
add
name Soup
desc veg
price 5
submit
course Mains
name Steak
desc beef
price 20
submit
save
";
    let (output, session) = run_script(script)?;

    assert_eq!(session.current_screen(), Screen::Home);
    assert_eq!(session.dishes().len(), 2);
    assert_eq!(session.dishes()[1].course, Course::Mains);
    assert!(output.contains("Total Items: 2"));
    assert!(output.contains("  Starters: $5.00"));
    assert!(output.contains("  Mains: $20.00"));
    assert!(output.contains("Steak - Mains"));
    Ok(())
}

/// 測試無效價格：顯示提示並保留表單內容
#[test]
fn test_invalid_price_keeps_form() -> Result<()> {
    let script = "\
add
course Desserts
name Cake
desc sweet
price abc
submit
";
    let (output, session) = run_script(script)?;

    assert!(output.contains("! Please enter a valid price."));
    assert!(session.dishes().is_empty());
    assert_eq!(session.draft().dish_name, "Cake");
    assert_eq!(session.draft().description, "sweet");
    assert_eq!(session.draft().price_text, "abc");
    assert_eq!(session.draft().course, Course::Desserts);
    Ok(())
}

#[test]
fn test_remove_from_add_screen() -> Result<()> {
    let script = "\
add
name Soup
price 5
submit
name Salad
price 7
submit
remove 0
remove 9
";
    let (output, session) = run_script(script)?;

    assert_eq!(session.dishes().len(), 1);
    assert_eq!(session.dishes()[0].dish_name, "Salad");
    assert!(output.contains("Removed Soup."));
    assert!(output.contains("! There is no dish at position 9."));
    Ok(())
}

#[test]
fn test_filter_screen_selection() -> Result<()> {
    let script = "\
add
name Soup
price 5
submit
course Mains
name Steak
price 20
submit
filter
show Mains
show Drinks
";
    let (output, session) = run_script(script)?;

    assert_eq!(session.current_screen(), Screen::FilterMenu);
    assert!(output.contains("Selected Course: All"));
    assert!(output.contains("Selected Course: Mains"));
    assert!(output.contains("! 'Drinks' is not a course."));
    assert_eq!(session.filtered_view().dishes.len(), 1);
    Ok(())
}

#[test]
fn test_commands_require_their_screen() -> Result<()> {
    let (output, session) = run_script("name Soup\nshow Mains\nback\n")?;

    assert!(output.contains("only available on the AddMenu screen"));
    assert!(output.contains("only available on the FilterMenu screen"));
    assert!(output.contains("Already on the home screen."));
    assert_eq!(session.draft().dish_name, "");
    Ok(())
}

#[test]
fn test_quit_stops_reading() -> Result<()> {
    let (_, session) = run_script("add\nquit\nname Soup\nprice 1\nsubmit\n")?;
    assert!(session.dishes().is_empty());
    Ok(())
}

#[test]
fn test_export_csv_from_shell() -> Result<()> {
    let script = "\
add
name Soup
desc veg
price 5
submit
export csv
";
    let (output, _) = run_script(script)?;
    assert!(output.contains("dishName,description,course,price\nSoup,veg,Starters,5.0"));
    Ok(())
}
