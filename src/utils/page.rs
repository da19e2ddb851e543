use super::format::escape_html;

/// Key of the balance region
pub const BALANCE_REGION: &str = "balance";
/// Key of the unspent transactions region
pub const TRANSACTIONS_REGION: &str = "transactions";
/// Key of the spent transactions region
pub const HISTORY_REGION: &str = "transactionsHistory";

/// Text both transaction regions show before anything is rendered into them
pub const NO_TRANSACTIONS: &str = "No transaction history";

/// A child of a page region
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Markup inserted verbatim
    Raw(String),
    /// A `<div>` wrapping already-built markup
    Div {
        class: Option<&'static str>,
        inner_html: String,
    },
}

impl Node {
    pub fn div(class: &'static str, inner_html: String) -> Self {
        Node::Div {
            class: Some(class),
            inner_html,
        }
    }

    /// A bare `<div>` whose content is `text`, escaped
    pub fn text_div(text: &str) -> Self {
        Node::Div {
            class: None,
            inner_html: escape_html(text),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Node::Raw(html) => html.clone(),
            Node::Div { class: Some(class), inner_html } => {
                format!("<div class=\"{}\">{}</div>", class, inner_html)
            }
            Node::Div { class: None, inner_html } => format!("<div>{}</div>", inner_html),
        }
    }
}

/// A page region that renderers write into
pub trait Region {
    fn id(&self) -> &str;

    /// Remove every child
    fn clear(&mut self);

    /// Replace the whole content with `html`
    fn set_inner_html(&mut self, html: String);

    fn append(&mut self, node: Node);
}

/// In-memory region backing a `<div id="...">` of the page
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlRegion {
    id: &'static str,
    children: Vec<Node>,
}

impl HtmlRegion {
    pub fn new(id: &'static str) -> Self {
        HtmlRegion {
            id,
            children: Vec::new(),
        }
    }

    pub fn with_text(id: &'static str, text: &str) -> Self {
        HtmlRegion {
            id,
            children: vec![Node::Raw(escape_html(text))],
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn inner_html(&self) -> String {
        self.children.iter().map(Node::to_html).collect()
    }

    pub fn render(&self) -> String {
        format!("<div id=\"{}\">{}</div>", self.id, self.inner_html())
    }
}

impl Region for HtmlRegion {
    fn id(&self) -> &str {
        self.id
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn set_inner_html(&mut self, html: String) {
        self.children.clear();
        self.children.push(Node::Raw(html));
    }

    fn append(&mut self, node: Node) {
        self.children.push(node);
    }
}

/// The wallet page: three regions addressed by stable keys
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub balance: HtmlRegion,
    pub transactions: HtmlRegion,
    pub history: HtmlRegion,
}

impl Page {
    pub fn new() -> Self {
        Page {
            balance: HtmlRegion::new(BALANCE_REGION),
            transactions: HtmlRegion::with_text(TRANSACTIONS_REGION, NO_TRANSACTIONS),
            history: HtmlRegion::with_text(HISTORY_REGION, NO_TRANSACTIONS),
        }
    }

    /// Look up a region by its key
    pub fn region(&self, key: &str) -> Option<&HtmlRegion> {
        match key {
            BALANCE_REGION => Some(&self.balance),
            TRANSACTIONS_REGION => Some(&self.transactions),
            HISTORY_REGION => Some(&self.history),
            _ => None,
        }
    }

    /// Borrow the balance, transactions and history regions at once
    pub fn regions_mut(&mut self) -> (&mut HtmlRegion, &mut HtmlRegion, &mut HtmlRegion) {
        (&mut self.balance, &mut self.transactions, &mut self.history)
    }

    /// Render the full HTML document
    pub fn render(&self) -> String {
        let mut output = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n<title>Wallet</title>\n</head>\n<body>\n");

        output.push_str(&self.balance.render());
        output.push('\n');

        output.push_str("<h2>Unspent Transactions:</h2>\n");
        output.push_str(&self.transactions.render());
        output.push('\n');

        output.push_str("<h2>Transaction History:</h2>\n");
        output.push_str(&self.history.render());
        output.push('\n');

        output.push_str("</body>\n</html>\n");
        output
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
