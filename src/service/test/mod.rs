mod reaction_role;
