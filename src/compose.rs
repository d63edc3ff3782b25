//! Instruction composition and the pre-submission check

use log::debug;

use crate::credential::Credential;
use crate::document::Document;
use crate::templates::PromptTemplate;

/// Used in place of an empty question when a template is selected
pub const DEFAULT_QUESTION: &str
  = "Please provide a general analysis of the material.";

/// Which instruction source the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptChoice
{   /// Free-form: the question is the whole instruction
    #[default]
    Custom
  , /// A static template followed by the question
    Template(&'static PromptTemplate)
}

/// Build the instruction string for a choice and a question.
///
/// Pure: the same choice and question always give the same string.
/// The question is passed through as typed; trimming only decides
/// whether it is empty. An empty question with a template becomes
/// [`DEFAULT_QUESTION`], in custom mode it stays as entered.
pub fn compose_instruction(
  choice: PromptChoice
, question: &str
) -> String
{   match choice
    {   PromptChoice::Custom => question.to_string()
      , PromptChoice::Template(template) => {
          let question = if question.trim().is_empty()
          {   DEFAULT_QUESTION
          } else
          {   question
          };
          format!(
            "{}\n\n{} {}",
            template.body, template.question_label, question
          )
        }
    }
}

/// Why a submission cannot be sent yet. Not an error: the caller shows
/// the message and keeps submission disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blocked
{   NoDocument
  , NoQuestion
  , MissingCredential(crate::Provider)
}

impl Blocked
{   pub fn message(&self) -> String
    {   match self
        {   Blocked::NoDocument => {
              "Upload an article or add .txt/.md files to the documents \
               directory to continue."
                .to_string()
            }
          , Blocked::NoQuestion => {
              "Ask something about the article, or choose a prompt \
               template."
                .to_string()
            }
          , Blocked::MissingCredential(provider) => {
              format!("Please add your {} API key to continue.", provider)
            }
        }
    }

    pub fn is_missing_input(&self) -> bool
    {   matches!(self, Blocked::NoDocument | Blocked::NoQuestion)
    }
}

/// Everything the user has entered for one submission
#[derive(Debug, Clone)]
pub struct Submission<'a>
{   pub provider: crate::Provider
  , pub document: &'a Document
  , pub choice: PromptChoice
  , pub question: &'a str
  , pub credential: Option<&'a Credential>
}

/// A submission that passed [`Submission::check`]
#[derive(Debug, Clone)]
pub struct ReadySubmission<'a>
{   pub document: &'a Document
  , pub instruction: String
  , pub credential: &'a Credential
}

impl<'a> Submission<'a>
{   /// Document and question only; the credential is not looked at
    pub fn check_input(&self) -> Result<(), Blocked>
    {   if self.document.is_empty()
        {   debug!("Submission blocked: no document");
            return Err(Blocked::NoDocument);
        }

        if self.choice == PromptChoice::Custom
          && self.question.trim().is_empty()
        {   debug!("Submission blocked: no question");
            return Err(Blocked::NoQuestion);
        }
        Ok(())
    }

    /// Input is checked before the credential
    pub fn check(&self) -> Result<ReadySubmission<'a>, Blocked>
    {   self.check_input()?;

        let credential = self.credential
          .ok_or_else(|| {
            debug!("Submission blocked: no API key");
            Blocked::MissingCredential(self.provider)
          })?;

        Ok(ReadySubmission
        {   document: self.document
          , instruction: compose_instruction(self.choice, self.question)
          , credential
        })
    }
}
