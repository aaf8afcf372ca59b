//! Members of interfaces, mixins, and dictionaries.

use widl_ir::{Member, MemberFlags, Specialization};
use widl_lexer::TokenKind;

use crate::Parser;

/// Modifier keywords in the order they are accepted.
const MODIFIERS: [(&str, MemberFlags); 5] = [
    ("const", MemberFlags::CONST),
    ("static", MemberFlags::STATIC),
    ("readonly", MemberFlags::READONLY),
    ("required", MemberFlags::REQUIRED),
    ("attribute", MemberFlags::ATTRIBUTE),
];

impl Parser<'_> {
    /// One member, without its terminating `;`.
    ///
    /// Dictionary members are attributes implicitly. `required` is accepted
    /// on any member; whether it is meaningful is left to later phases.
    pub(super) fn member(&mut self, dictionary: bool) -> Member {
        self.node(|p| {
            let mut annotations = p.try_annotations();
            let mut flags = if dictionary {
                MemberFlags::ATTRIBUTE
            } else {
                MemberFlags::empty()
            };

            let specialization = p.specialization();
            for (keyword, flag) in MODIFIERS {
                if p.try_consume_word(keyword) {
                    flags |= flag;
                }
            }

            // Annotations may also follow the modifiers.
            if annotations.is_empty() {
                annotations = p.try_annotations();
            }

            let ty = p.parse_type();
            let name = p.try_consume_identifier();
            let parameters = if flags.intersects(MemberFlags::ATTRIBUTE | MemberFlags::CONST) {
                Vec::new()
            } else {
                p.parameters()
            };
            let default = p
                .try_consume(TokenKind::Equals)
                .map(|_| p.default_value());

            Member {
                name,
                ty,
                flags,
                specialization,
                parameters,
                default,
                annotations,
                ..Member::default()
            }
        })
    }

    fn specialization(&mut self) -> Option<Specialization> {
        if !self.check(TokenKind::Identifier) {
            return None;
        }
        let specialization = Specialization::from_keyword(&self.current().text)?;
        self.advance();
        Some(specialization)
    }
}
