use pagesearch_core::{AppViewModel, DisplayArticle, PageSize, Pagination, Screen};

const INDENT: &str = "     ";

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![status_line(view)];

    match &view.screen {
        Screen::Blank => {}
        Screen::Loading => lines.extend(loading_placeholder()),
        Screen::Error { message, controls } => {
            lines.extend(error_view(message));
            lines.push(pagination_line(controls));
        }
        Screen::Empty => lines.extend(empty_results()),
        Screen::Results { articles, controls } => {
            for (index, article) in articles.iter().enumerate() {
                lines.extend(result_item(index + 1, article));
            }
            lines.push(pagination_line(controls));
        }
    }

    lines
}

fn status_line(view: &AppViewModel) -> String {
    let per_page = match view.page_size {
        Some(size) => size.to_string(),
        None => format!("{} (default)", view.per_page),
    };
    format!(
        "Search: {:?} | Results per page: {} | Page {}",
        view.query_text, per_page, view.page
    )
}

/// One result card: title and date, then author, then link.
pub fn result_item(index: usize, article: &DisplayArticle) -> Vec<String> {
    vec![
        format!("{index:>3}. {}  [{}]", article.title, article.date),
        format!("{INDENT}{}", article.author),
        format!("{INDENT}{}", article.link),
    ]
}

pub fn loading_placeholder() -> Vec<String> {
    vec![
        "  ...  Loading...  [Loading...]".to_string(),
        format!("{INDENT}Loading..."),
    ]
}

pub fn empty_results() -> Vec<String> {
    vec![
        "No articles found with that search criteria.".to_string(),
        "You could try different search terms.".to_string(),
    ]
}

fn error_view(message: &str) -> Vec<String> {
    vec![
        "Something went wrong.".to_string(),
        format!("Error: {message}"),
        "Please return to the previous page (prev) or clear the search (clear).".to_string(),
    ]
}

fn pagination_line(controls: &Pagination) -> String {
    let prev = if controls.prev_enabled { "[Prev]" } else { "(Prev)" };
    let next = if controls.next_enabled { "[Next]" } else { "(Next)" };
    format!("{prev}  Page {}  {next}", controls.page)
}

pub fn help() -> Vec<String> {
    let sizes: Vec<String> = PageSize::ALL.iter().map(ToString::to_string).collect();
    vec![
        "Commands:".to_string(),
        "  search <text>     search page titles, authors and key words (s)".to_string(),
        format!("  per-page <n>      results per page: {} (pp)", sizes.join(" / ")),
        "  next / prev       move between result pages (n / p)".to_string(),
        "  clear             reset the search (c)".to_string(),
        "  help / quit       show this text / leave (? / q)".to_string(),
    ]
}
