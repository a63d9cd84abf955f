use std::fmt;
use std::str::FromStr;

/// A logical namespace for records. Every table has the same shape:
/// a UUID primary key and a JSONB payload column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Name used in logs.
    pub name: &'static str,
    /// Identifier exactly as it appears in SQL, quotes included.
    pub ident: &'static str,
    pub id_column: &'static str,
    pub data_column: &'static str,
}

impl TableSpec {
    pub fn create_statement(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {} UUID PRIMARY KEY,\n    {} JSONB NOT NULL\n)",
            self.ident, self.id_column, self.data_column
        )
    }

    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO {} ({}, {}) VALUES ($1, $2::jsonb) RETURNING {}",
            self.ident, self.id_column, self.data_column, self.id_column
        )
    }

    pub fn select_statement(&self) -> String {
        format!(
            "SELECT {} AS id, {} AS data FROM {} WHERE {} = $1",
            self.id_column, self.data_column, self.ident, self.id_column
        )
    }
}

pub const QUIZZES: TableSpec = TableSpec {
    name: "quizzes",
    ident: "quizzes",
    id_column: "quiz_id",
    data_column: "quiz_data",
};

pub const TYPING_CONTENTS: TableSpec = TableSpec {
    name: "typingContents",
    ident: "typingContents",
    id_column: "id",
    data_column: "data",
};

pub const TYPING_CONTENT: TableSpec = TableSpec {
    name: "TypingContent",
    ident: "\"TypingContent\"",
    id_column: "id",
    data_column: "data",
};

/// How a successful store is reported back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{status, message, quizId}` JSON body.
    Receipt { message: &'static str },
    /// Plain-text sentence ending in the share URL.
    Pointer { message: &'static str },
}

/// Everything the write path needs to know about one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub table: TableSpec,
    pub input_field: &'static str,
    pub shape: ResponseShape,
    /// Escape backslashes and quotes in string payloads before storing.
    pub escape_text: bool,
}

pub const QUIZ: Collection = Collection {
    table: QUIZZES,
    input_field: "quizData",
    shape: ResponseShape::Receipt {
        message: "Quiz successfully stored",
    },
    escape_text: false,
};

pub const LOREM: Collection = Collection {
    table: TYPING_CONTENTS,
    input_field: "content",
    shape: ResponseShape::Pointer {
        message: "Lorem passage generated. Start typing at",
    },
    escape_text: false,
};

pub const CONTENT: Collection = Collection {
    table: TYPING_CONTENT,
    input_field: "content",
    shape: ResponseShape::Pointer {
        message: "Content successfully stored. Start typing at",
    },
    escape_text: true,
};

/// Which historical variant of the service this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Quiz,
    Lorem,
    Content,
}

impl Deployment {
    pub fn collection(self) -> Collection {
        match self {
            Deployment::Quiz => QUIZ,
            Deployment::Lorem => LOREM,
            Deployment::Content => CONTENT,
        }
    }

    pub fn tables(self) -> Vec<TableSpec> {
        vec![self.collection().table]
    }
}

impl FromStr for Deployment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiz" => Ok(Deployment::Quiz),
            "lorem" => Ok(Deployment::Lorem),
            "content" => Ok(Deployment::Content),
            other => Err(format!(
                "Invalid QUIZSTORE_DEPLOYMENT '{other}': expected quiz, lorem or content"
            )),
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Quiz => write!(f, "quiz"),
            Deployment::Lorem => write!(f, "lorem"),
            Deployment::Content => write!(f, "content"),
        }
    }
}
