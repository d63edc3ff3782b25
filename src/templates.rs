//! Static prompt templates, one table for every analysis variant

pub const QUESTION_LABEL: &str = "Question:";
pub const RESEARCH_QUESTION_LABEL: &str = "Research Question:";

/// A pre-written instruction with a label for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate
{   /// Short display string, also the lookup key
    pub label: &'static str
  , /// Instruction text sent to the model
    pub body: &'static str
  , /// Label placed before the user's question
    pub question_label: &'static str
}

pub static TEMPLATES: &[PromptTemplate] = &[
  PromptTemplate
  {   label: "Summarize key themes"
    , body: "You are a qualitative research analyst. Read the material \
             above and identify the main themes that emerge. For each \
             theme give a short title, a one-paragraph description and \
             an indication of how often it comes up."
    , question_label: RESEARCH_QUESTION_LABEL
  }
, PromptTemplate
  {   label: "Compile relevant quotes"
    , body: "Compile the quotes from the material above that are most \
             relevant to the question below. Reproduce each quote \
             verbatim, attribute it to its speaker or source where the \
             material makes that possible, and group related quotes \
             together."
    , question_label: RESEARCH_QUESTION_LABEL
  }
, PromptTemplate
  {   label: "Identify pain points"
    , body: "List the problems, frustrations and unmet needs expressed \
             in the material above. Rank them by how strongly and how \
             often they are expressed, and support each one with a \
             short supporting excerpt."
    , question_label: RESEARCH_QUESTION_LABEL
  }
, PromptTemplate
  {   label: "Short summary"
    , body: "Give a short summary of the material above in no more \
             than five sentences."
    , question_label: QUESTION_LABEL
  }
, PromptTemplate
  {   label: "Extract action items"
    , body: "Extract every decision, commitment and follow-up task \
             mentioned in the material above as a bulleted list. Note \
             the owner and deadline of each item when stated."
    , question_label: QUESTION_LABEL
  }
];

/// Look a template up by its exact label
pub fn find(label: &str) -> Option<&'static PromptTemplate>
{   TEMPLATES.iter().find(|t| t.label == label)
}

pub fn find_or_err(label: &str)
  -> Result<&'static PromptTemplate, crate::error::Error>
{   find(label)
      .ok_or_else(|| crate::error::Error::UnknownTemplate(label.to_string()))
}

pub fn labels() -> impl Iterator<Item = &'static str>
{   TEMPLATES.iter().map(|t| t.label)
}
