use crate::core::export::ExportFormat;
use crate::core::session::{Screen, Session};
use crate::domain::model::{Course, DishEntry};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  home | add | filter      go to a screen
  back                     return to the previous screen
  name <text>              set the dish name (add screen)
  desc <text>              set the description (add screen)
  course <label>           Starters, Mains or Desserts (add screen)
  price <text>             set the price (add screen)
  submit                   add the dish (add screen)
  remove <index>           remove the dish at index (add screen)
  save                     save the menu and go home (add screen)
  show <All|label>         choose the course to list (filter screen)
  list                     redraw the current screen
  export <csv|tsv|json>    print a snapshot of the menu
  help                     show this text
  quit                     end the session";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Go(Screen),
    Back,
    Name(String),
    Description(String),
    Course(Course),
    Price(String),
    Submit,
    Remove(usize),
    Save,
    Show(String),
    List,
    Export(ExportFormat),
    Help,
    Quit,
}

impl Command {
    /// 解析一行輸入；空白行與 # 註解回傳 None
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let invalid = |reason: &str| MenuError::InvalidCommand {
            input: line.to_string(),
            reason: reason.to_string(),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "home" => Command::Go(Screen::Home),
            "add" => Command::Go(Screen::AddMenu),
            "filter" => Command::Go(Screen::FilterMenu),
            "back" => Command::Back,
            "name" => Command::Name(rest.to_string()),
            "desc" | "description" => Command::Description(rest.to_string()),
            "course" => Command::Course(rest.parse()?),
            "price" => Command::Price(rest.to_string()),
            "submit" => Command::Submit,
            "remove" => Command::Remove(
                rest.parse()
                    .map_err(|_| invalid("remove expects a position like 'remove 0'"))?,
            ),
            "save" => Command::Save,
            "show" if rest.is_empty() => return Err(invalid("show expects All or a course")),
            "show" => Command::Show(rest.to_string()),
            "list" => Command::List,
            "export" => Command::Export(rest.parse()?),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(invalid("Unknown command, type 'help' to list commands")),
        };
        Ok(Some(command))
    }

    fn required_screen(&self) -> Option<Screen> {
        match self {
            Command::Name(_)
            | Command::Description(_)
            | Command::Course(_)
            | Command::Price(_)
            | Command::Submit
            | Command::Remove(_)
            | Command::Save => Some(Screen::AddMenu),
            Command::Show(_) => Some(Screen::FilterMenu),
            _ => None,
        }
    }
}

/// Text front end over a `Session`: reads commands and draws screens.
pub struct Shell {
    session: Session,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        self.render(output)?;

        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("Bad input '{}': {}", line, e);
                    writeln!(output, "! {}", e.user_friendly_message())?;
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }
            if let Err(e) = self.execute(command, output) {
                tracing::debug!("Command failed: {}", e);
                writeln!(output, "! {}", e.user_friendly_message())?;
            }
        }

        tracing::info!("👋 Session ended with {} dishes", self.session.dishes().len());
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        if let Some(screen) = command.required_screen() {
            if self.session.current_screen() != screen {
                return Err(MenuError::InvalidCommand {
                    input: format!("{:?}", command),
                    reason: format!("That command is only available on the {} screen.", screen),
                });
            }
        }

        match command {
            Command::Go(screen) => {
                self.session.navigate(screen);
                self.render(output)?;
            }
            Command::Back => {
                if self.session.back() {
                    self.render(output)?;
                } else {
                    writeln!(output, "Already on the home screen.")?;
                }
            }
            Command::Name(text) => self.session.draft_mut().dish_name = text,
            Command::Description(text) => self.session.draft_mut().description = text,
            Command::Course(course) => self.session.draft_mut().course = course,
            Command::Price(text) => self.session.draft_mut().price_text = text,
            Command::Submit => {
                let entry = self.session.submit_draft()?;
                writeln!(output, "Added {}.", entry.dish_name)?;
                self.render(output)?;
            }
            Command::Remove(index) => {
                let removed = self.session.remove_dish(index)?;
                writeln!(output, "Removed {}.", removed.dish_name)?;
                self.render(output)?;
            }
            Command::Save => {
                self.session.save_menu();
                self.render(output)?;
            }
            Command::Show(label) => {
                self.session.select_filter(&label)?;
                self.render(output)?;
            }
            Command::List => self.render(output)?,
            Command::Export(format) => {
                let snapshot = self.session.export(&format)?;
                writeln!(output, "{}", snapshot.trim_end())?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    pub fn render<W: Write>(&self, output: &mut W) -> Result<()> {
        match self.session.current_screen() {
            Screen::Home => self.render_home(output),
            Screen::AddMenu => self.render_add(output),
            Screen::FilterMenu => self.render_filter(output),
        }
    }

    fn render_home<W: Write>(&self, output: &mut W) -> Result<()> {
        let view = self.session.home_view();
        writeln!(output, "== {} ==", self.session.settings().menu_name())?;
        writeln!(output, "Total Items: {}", view.total_items)?;
        writeln!(output, "Average Prices by Course:")?;
        for (course, average) in &view.averages {
            writeln!(output, "  {}: {}", course, self.session.format_price(*average))?;
        }
        self.render_dishes(output, &view.dishes, false)
    }

    fn render_add<W: Write>(&self, output: &mut W) -> Result<()> {
        let draft = self.session.draft();
        writeln!(output, "== Add Dish ==")?;
        writeln!(output, "Dish Name: {}", draft.dish_name)?;
        writeln!(output, "Description: {}", draft.description)?;
        writeln!(output, "Course: {}", draft.course)?;
        writeln!(output, "Price: {}", draft.price_text)?;
        writeln!(output, "Added Dishes:")?;
        self.render_dishes(output, self.session.dishes(), true)
    }

    fn render_filter<W: Write>(&self, output: &mut W) -> Result<()> {
        let view = self.session.filtered_view();
        writeln!(output, "== Filter Menu ==")?;
        writeln!(output, "Selected Course: {}", view.selected)?;
        self.render_dishes(output, &view.dishes, false)
    }

    fn render_dishes<W: Write>(&self, output: &mut W, dishes: &[DishEntry], indexed: bool) -> Result<()> {
        if dishes.is_empty() {
            writeln!(output, "  (no dishes)")?;
        }
        for (index, dish) in dishes.iter().enumerate() {
            let prefix = if indexed {
                format!("[{}] ", index)
            } else {
                String::new()
            };
            writeln!(output, "  {}{} - {}", prefix, dish.dish_name, dish.course)?;
            if !dish.description.is_empty() {
                writeln!(output, "    {}", dish.description)?;
            }
            writeln!(output, "    {}", self.session.format_price(dish.price))?;
        }
        Ok(())
    }
}
