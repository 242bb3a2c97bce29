/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Serializer for `application/x-www-form-urlencoded` awsQuery request bodies.

use smithy_types::instant::Format;
use smithy_types::Instant;
use std::borrow::Cow;
use urlencoding::encode;

/// Writes the body of an awsQuery request
///
/// Every body starts with the `Action` and `Version` parameters.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    /// Start a value whose key is `prefix`
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {}
}

/// Writes a single (possibly nested) value of a query body
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    fn new(output: &'a mut String, prefix: Cow<'a, str>) -> Self {
        QueryValueWriter { output, prefix }
    }

    /// Member `name` of the structure at this prefix
    pub fn prefix(&mut self, name: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, name)),
        )
    }

    /// Start a list. Members are written as `{prefix}.{member_name}.{n}` starting from 1.
    pub fn start_list(self, member_name: Option<&str>) -> QueryListWriter<'a> {
        QueryListWriter {
            output: self.output,
            prefix: self.prefix,
            member_name: member_name.unwrap_or("member").to_string(),
            next_index: 1,
        }
    }

    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(if value { "true" } else { "false" });
    }

    pub fn number(mut self, value: i64) {
        self.write_param_name();
        self.output.push_str(&value.to_string());
    }

    pub fn float(mut self, value: f64) {
        self.write_param_name();
        if value.is_nan() {
            self.output.push_str("NaN");
        } else if value.is_infinite() {
            self.output
                .push_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        } else {
            self.output.push_str(&value.to_string());
        }
    }

    pub fn instant(self, value: &Instant, format: Format) {
        self.string(&value.fmt(format));
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

/// Writes the members of a list value
#[must_use]
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    member_name: String,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = format!("{}.{}.{}", self.prefix, self.member_name, self.next_index);
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    /// Close the list. An empty list is written as `{prefix}=` so the service sees it was set.
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_empty();
        }
    }
}

impl QueryValueWriter<'_> {
    fn write_empty(mut self) {
        self.write_param_name();
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use pretty_assertions::assert_eq;
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn action_and_version() {
        let mut out = String::new();
        QueryWriter::new(&mut out, "DescribeDBClusters", "2014-10-31").finish();
        assert_eq!("Action=DescribeDBClusters&Version=2014-10-31", out);
    }

    #[test]
    fn scalars_are_encoded() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateDBCluster", "2014-10-31");
        writer.prefix("DBClusterIdentifier").string("my cluster&co");
        writer.prefix("Port").number(8182);
        writer.prefix("StorageEncrypted").boolean(true);
        writer.prefix("Ratio").float(0.5);
        writer
            .prefix("RestoreTime")
            .instant(&Instant::from_epoch_seconds(1576540098), Format::DateTime);
        writer.finish();
        assert_eq!(
            "Action=CreateDBCluster&Version=2014-10-31\
             &DBClusterIdentifier=my%20cluster%26co\
             &Port=8182\
             &StorageEncrypted=true\
             &Ratio=0.5\
             &RestoreTime=2019-12-16T23%3A48%3A18Z",
            out
        );
    }

    #[test]
    fn lists_and_structures() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateDBCluster", "2014-10-31");
        let mut ids = writer.prefix("VpcSecurityGroupIds").start_list(Some("VpcSecurityGroupId"));
        ids.entry().string("sg-1");
        ids.entry().string("sg-2");
        ids.finish();
        let mut tags = writer.prefix("Tags").start_list(Some("Tag"));
        let mut tag = tags.entry();
        tag.prefix("Key").string("env");
        tag.prefix("Value").string("prod");
        tags.finish();
        writer.prefix("AvailabilityZones").start_list(None).finish();
        writer.finish();
        assert_eq!(
            "Action=CreateDBCluster&Version=2014-10-31\
             &VpcSecurityGroupIds.VpcSecurityGroupId.1=sg-1\
             &VpcSecurityGroupIds.VpcSecurityGroupId.2=sg-2\
             &Tags.Tag.1.Key=env\
             &Tags.Tag.1.Value=prod\
             &AvailabilityZones=",
            out
        );
    }
}
