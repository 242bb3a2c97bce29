/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A small document model built on top of [`xmlparser`].
//!
//! Responses of the awsQuery protocol are small and fully buffered, so the whole document is
//! decoded into a tree of [`Element`]s. Namespace prefixes are dropped: elements are matched by
//! their local name.

use crate::unescape::unescape;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XmlError {
    #[error("invalid XML: {0}")]
    InvalidXml(String),
    #[error("invalid XML escape: {reason}")]
    Unescape { reason: String },
    #[error("mismatched closing tag: expected `{expected}`, found `{found}`")]
    MismatchedTag { expected: String, found: String },
    #[error("the document has no root element")]
    NoRoot,
    #[error("expected element `{expected}`, found `{found}`")]
    UnexpectedElement { expected: String, found: String },
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("invalid value for `{element}`: {reason}")]
    InvalidValue { element: String, reason: String },
}

impl From<xmlparser::Error> for XmlError {
    fn from(err: xmlparser::Error) -> Self {
        XmlError::InvalidXml(err.to_string())
    }
}

impl XmlError {
    pub fn invalid_value(element: &str, reason: impl Into<String>) -> Self {
        XmlError::InvalidValue {
            element: element.to_string(),
            reason: reason.into(),
        }
    }
}

/// An XML element with its attributes, text content, and child elements
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Local name of the element, without a namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Concatenated, unescaped text content directly inside this element
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the local name `name`
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|el| el.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |el| el.name == name)
    }

    /// Text of the first child named `name`
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Element::text)
    }

    /// Parse the text of the first child named `name`
    pub fn child_parsed<T>(&self, name: &str) -> Result<Option<T>, XmlError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.child_text(name)
            .map(|text| {
                text.trim()
                    .parse::<T>()
                    .map_err(|e| XmlError::invalid_value(name, e.to_string()))
            })
            .transpose()
    }

    /// Text of every `member` element inside the child named `name`
    ///
    /// Lists are serialized as `<Name><member>a</member><member>b</member></Name>`.
    pub fn child_list(&self, name: &str, member: &str) -> Option<Vec<String>> {
        self.child(name).map(|list| {
            list.children_named(member)
                .map(|el| el.text().to_string())
                .collect()
        })
    }

    /// Return this element if it has the expected name
    pub fn expect(&self, name: &str) -> Result<&Element, XmlError> {
        if self.name == name {
            Ok(self)
        } else {
            Err(XmlError::UnexpectedElement {
                expected: name.to_string(),
                found: self.name.clone(),
            })
        }
    }
}

/// Decode `doc` and return its root element
pub fn parse(doc: &str) -> Result<Element, XmlError> {
    if doc.trim().is_empty() {
        return Err(XmlError::NoRoot);
    }
    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;
    for token in Tokenizer::from(doc) {
        match token? {
            Token::ElementStart { local, .. } => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlError::UnexpectedElement {
                        expected: "end of document".to_string(),
                        found: local.as_str().to_string(),
                    });
                }
                stack.push(Element {
                    name: local.as_str().to_string(),
                    ..Default::default()
                });
            }
            Token::Attribute { local, value, .. } => {
                if let Some(el) = stack.last_mut() {
                    el.attributes
                        .push((local.as_str().to_string(), unescape(value.as_str())?.into_owned()));
                }
            }
            Token::ElementEnd { end, .. } => match end {
                ElementEnd::Open => {}
                ElementEnd::Empty => close(&mut stack, &mut root, None)?,
                ElementEnd::Close(_, local) => close(&mut stack, &mut root, Some(local.as_str()))?,
            },
            Token::Text { text } => {
                if let Some(el) = stack.last_mut() {
                    el.text.push_str(&unescape(text.as_str())?);
                }
            }
            Token::Cdata { text, .. } => {
                if let Some(el) = stack.last_mut() {
                    el.text.push_str(text.as_str());
                }
            }
            _ => {}
        }
    }
    if let Some(unclosed) = stack.pop() {
        return Err(XmlError::MissingElement(format!("</{}>", unclosed.name)));
    }
    root.ok_or(XmlError::NoRoot)
}

fn close(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    name: Option<&str>,
) -> Result<(), XmlError> {
    let el = stack.pop().ok_or(XmlError::NoRoot)?;
    if let Some(name) = name {
        if name != el.name {
            return Err(XmlError::MismatchedTag {
                expected: el.name,
                found: name.to_string(),
            });
        }
    }
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None => *root = Some(el),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{parse, XmlError};
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_document() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<DescribeDBClustersResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <DescribeDBClustersResult>
    <DBClusters>
      <DBCluster><DBClusterIdentifier>one</DBClusterIdentifier><Port>8182</Port></DBCluster>
      <DBCluster><DBClusterIdentifier>two&amp;three</DBClusterIdentifier></DBCluster>
    </DBClusters>
  </DescribeDBClustersResult>
</DescribeDBClustersResponse>"#;
        let root = parse(doc).unwrap();
        assert_eq!(root.name(), "DescribeDBClustersResponse");
        assert_eq!(root.attr("xmlns"), Some("http://rds.amazonaws.com/doc/2014-10-31/"));
        let clusters: Vec<_> = root
            .child("DescribeDBClustersResult")
            .and_then(|r| r.child("DBClusters"))
            .unwrap()
            .children_named("DBCluster")
            .collect();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].child_text("DBClusterIdentifier"), Some("one"));
        assert_eq!(clusters[0].child_parsed::<i32>("Port").unwrap(), Some(8182));
        assert_eq!(clusters[1].child_text("DBClusterIdentifier"), Some("two&three"));
        assert_eq!(clusters[1].child_parsed::<i32>("Port").unwrap(), None);
    }

    #[test]
    fn namespace_prefixes_are_dropped() {
        let root = parse("<a:Root><a:Child>x</a:Child></a:Root>").unwrap();
        assert_eq!(root.name(), "Root");
        assert_eq!(root.child_text("Child"), Some("x"));
    }

    #[test]
    fn lists_and_cdata() {
        let root =
            parse("<R><Names><member>a</member><member><![CDATA[<b>]]></member></Names></R>").unwrap();
        assert_eq!(
            root.child_list("Names", "member"),
            Some(vec!["a".to_string(), "<b>".to_string()])
        );
        assert_eq!(root.child_list("Missing", "member"), None);
    }

    #[test]
    fn invalid_values() {
        let root = parse("<R><Port>eighty</Port></R>").unwrap();
        assert!(matches!(
            root.child_parsed::<i32>("Port"),
            Err(XmlError::InvalidValue { .. })
        ));
    }

    #[test]
    fn malformed_documents() {
        assert!(matches!(
            parse("<a><b></a></b>"),
            Err(XmlError::MismatchedTag { .. })
        ));
        assert_eq!(parse(""), Err(XmlError::NoRoot));
        assert!(parse("<a>").is_err());
        assert!(parse("<a></a><b></b>").is_err());
    }
}
