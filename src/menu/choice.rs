use std::fmt;

/// Top-level menu entries, numbered in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayCities,
    CityDistances,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [
        MenuChoice::DisplayCities,
        MenuChoice::CityDistances,
        MenuChoice::Quit,
    ];

    pub fn index(self) -> usize {
        match self {
            MenuChoice::DisplayCities => 0,
            MenuChoice::CityDistances => 1,
            MenuChoice::Quit => 2,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuChoice::DisplayCities => "DisplayCities",
            MenuChoice::CityDistances => "CityDistances",
            MenuChoice::Quit => "Quit",
        };
        f.write_str(name)
    }
}

/// A line typed at the top-level prompt that parsed as a menu value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Choice(MenuChoice),
    /// Any other integer; accepted but selects nothing
    Unlisted(i64),
}

impl MenuInput {
    /// Accepts any integer, or an entry name spelled exactly (case-sensitive)
    pub fn parse(input: &str) -> Option<MenuInput> {
        let input = input.trim();
        if let Ok(number) = input.parse::<i64>() {
            let choice = usize::try_from(number)
                .ok()
                .and_then(|index| MenuChoice::ALL.get(index).copied());
            return Some(match choice {
                Some(choice) => MenuInput::Choice(choice),
                None => MenuInput::Unlisted(number),
            });
        }
        MenuChoice::ALL
            .iter()
            .copied()
            .find(|c| c.to_string() == input)
            .map(MenuInput::Choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(
            MenuInput::parse("0"),
            Some(MenuInput::Choice(MenuChoice::DisplayCities))
        );
        assert_eq!(
            MenuInput::parse(" 1 "),
            Some(MenuInput::Choice(MenuChoice::CityDistances))
        );
        assert_eq!(
            MenuInput::parse("2"),
            Some(MenuInput::Choice(MenuChoice::Quit))
        );
    }

    #[test]
    fn test_parse_unlisted_number() {
        assert_eq!(MenuInput::parse("7"), Some(MenuInput::Unlisted(7)));
        assert_eq!(MenuInput::parse("-1"), Some(MenuInput::Unlisted(-1)));
    }

    #[test]
    fn test_parse_name_is_case_sensitive() {
        assert_eq!(
            MenuInput::parse("Quit"),
            Some(MenuInput::Choice(MenuChoice::Quit))
        );
        assert_eq!(
            MenuInput::parse("DisplayCities"),
            Some(MenuInput::Choice(MenuChoice::DisplayCities))
        );
        assert_eq!(MenuInput::parse("quit"), None);
        assert_eq!(MenuInput::parse("displaycities"), None);
        assert_eq!(MenuInput::parse(""), None);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.index(), i);
        }
    }
}
